//! Live adapters for real external interactions.

pub mod entropy;
pub mod filesystem;

pub use entropy::OsEntropy;
pub use filesystem::LiveFileSystem;

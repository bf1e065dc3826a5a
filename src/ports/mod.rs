//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (randomness, filesystem). Implementations live in
//! `src/adapters/`.

pub mod entropy;
pub mod filesystem;

pub use entropy::EntropySource;
pub use filesystem::FileSystem;

//! Port implementations.
//!
//! - `live`: real OS entropy and disk.
//! - `recording`: wrap another adapter and capture each call to a cassette.
//! - `replaying`: serve calls from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;

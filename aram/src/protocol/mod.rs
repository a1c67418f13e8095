// aram-rs/aram/src/protocol/mod.rs

/// Command APDUs
pub mod command;
/// Bounds-checked byte readers
pub mod parser;
/// Response APDUs
pub mod response;
/// Status words
pub mod status;

pub use command::Command;
pub use response::Response;
pub use status::StatusWord;

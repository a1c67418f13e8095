// aram-rs/aram/src/transport/mod.rs

/// In-process channel to an applet
pub mod loopback;
/// Scripted channel for tests
pub mod mock;
/// The `Channel` trait
pub mod traits;

pub use loopback::LoopbackChannel;
pub use mock::MockChannel;
pub use traits::Channel;

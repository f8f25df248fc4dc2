//! Component mounting and host event fan-out

pub mod base;
pub mod components;
pub mod registry;

pub use base::{lock, shared, Component, Context, Shared};
pub use components::{EXPIRING_NOTICE, ONLINE_NOTICE};
pub use registry::{ComponentId, ListenerId, Shell};

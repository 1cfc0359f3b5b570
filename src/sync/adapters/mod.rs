//! Adapter implementations of the synchronization core's ports.

pub mod markdown;
pub mod memory;
pub mod postgres;

// src/lib.rs
pub mod config;
pub mod core;
pub mod producers;

// Re-export the important types
pub use crate::core::{
    BoundedBuffer, BufferStats, ComponentLogger, Item, LineError, LineResult, LogContext,
    Producer, ProducerState, ProducerStatus, Session,
};
pub use crate::core::timestamp::utc_ns_now;
pub use crate::producers::ItemProducer;

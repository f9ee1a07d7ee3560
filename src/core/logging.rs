use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::buffer::BoundedBuffer;
use crate::core::timestamp::utc_ns_now;

// Global sequence number, correlates lines across components.
static LOG_SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct LogContext {
    pub component: String,
    pub instance_id: String,
    pub sequence: u64,
    pub timestamp_ns: u64,
}

impl LogContext {
    pub fn new(component: &str, instance_id: &str) -> Self {
        Self {
            component: component.to_string(),
            instance_id: instance_id.to_string(),
            sequence: LOG_SEQUENCE.fetch_add(1, Ordering::Relaxed),
            timestamp_ns: utc_ns_now(),
        }
    }

    pub fn format(&self, level: &str, message: &str) -> String {
        format!(
            "[{}][seq={:06}][{}:{}] {}",
            level, self.sequence, self.component, self.instance_id, message
        )
    }
}

/// Uniform structured logging for components (producers, session).
pub trait ComponentLogger {
    fn log_context(&self) -> LogContext;

    fn debug(&self, message: &str) {
        let ctx = self.log_context();
        log::debug!("{}", ctx.format("DEBUG", message));
    }

    fn info(&self, message: &str) {
        let ctx = self.log_context();
        log::info!("{}", ctx.format("INFO", message));
    }

    fn warn(&self, message: &str) {
        let ctx = self.log_context();
        log::warn!("{}", ctx.format("WARN", message));
    }

    fn error(&self, message: &str) {
        let ctx = self.log_context();
        log::error!("{}", ctx.format("ERROR", message));
    }

    fn trace_buffer<T>(&self, buffer: &BoundedBuffer<T>) {
        let stats = buffer.stats();
        let ctx = self.log_context();

        let buffer_info = format!(
            "buffer[addr={:?}] items={}/{}",
            buffer as *const _,
            stats.len,
            stats.capacity
        );

        log::debug!("{}", ctx.format("TRACE", &buffer_info));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_creation() {
        let ctx = LogContext::new("Producer", "item:0");

        assert_eq!(ctx.component, "Producer");
        assert_eq!(ctx.instance_id, "item:0");
        assert!(ctx.timestamp_ns > 0);
    }

    #[test]
    fn test_log_context_format() {
        let ctx = LogContext::new("Session", "main");
        let line = ctx.format("INFO", "started");

        assert!(line.starts_with("[INFO][seq="));
        assert!(line.contains("[Session:main]"));
        assert!(line.ends_with("started"));
    }

    #[test]
    fn test_sequence_increases() {
        let a = LogContext::new("X", "1");
        let b = LogContext::new("X", "1");
        assert!(b.sequence > a.sequence);
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

use crate::config::ValidatedLineConfig;
use crate::core::logging::ComponentLogger;
use crate::core::{BoundedBuffer, Item, LineError, LineResult, LogContext, Producer, ProducerStatus};
use crate::producers::ItemProducer;

/// One production session: a freshly built buffer/producer pair and a
/// one-shot start. A finished session is abandoned, never reused.
pub struct Session {
    name: String,
    buffer: Arc<BoundedBuffer<Item>>,
    producer: Box<dyn Producer>,
    started: AtomicBool,
}

impl Session {
    pub fn new(cfg: &ValidatedLineConfig) -> Self {
        let buffer = Arc::new(BoundedBuffer::new(cfg.capacity));
        let mut producer = Box::new(ItemProducer::new("item:0", cfg.interval));
        producer.attach_buffer(buffer.clone());

        let session = Self {
            name: "main".to_string(),
            buffer,
            producer,
            started: AtomicBool::new(false),
        };

        session.info(&format!(
            "session created, capacity={} interval={}ms",
            cfg.capacity,
            cfg.interval.as_millis()
        ));
        session
    }

    #[cfg(test)]
    pub fn with_params(capacity: usize, interval: Duration) -> Self {
        Self::new(&ValidatedLineConfig { capacity, interval })
    }

    /// One-shot: the second and every later call is rejected, regardless of
    /// whether the producer is still running.
    pub fn start(&mut self) -> LineResult<()> {
        if self.started.swap(true, Ordering::SeqCst) {
            self.warn("start rejected, session already started");
            return Err(LineError::AlreadyStarted);
        }

        self.producer
            .start()
            .map_err(|err| LineError::with_context("starting producer", err))?;
        self.info("production started");
        Ok(())
    }

    /// Idempotent. Cancels a blocked enqueue, cuts the interval sleep short
    /// and joins the producer thread.
    pub fn stop(&mut self) -> LineResult<()> {
        self.producer
            .stop()
            .map_err(|err| LineError::with_context("stopping producer", err))?;
        self.trace_buffer(self.buffer.as_ref());
        Ok(())
    }

    /// The buffer's `get` side is complete and usable even though no
    /// consumer ships with the binary; the reference behavior only ever
    /// fills the buffer (known gap, kept deliberately).
    pub fn buffer(&self) -> Arc<BoundedBuffer<Item>> {
        self.buffer.clone()
    }

    pub fn producer_status(&self) -> ProducerStatus {
        self.producer.status()
    }
}

impl ComponentLogger for Session {
    fn log_context(&self) -> LogContext {
        LogContext::new("Session", &self.name)
    }
}

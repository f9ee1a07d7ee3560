use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::core::{
    BoundedBuffer, ComponentLogger, Item, LineError, LogContext, Producer, ProducerState,
    ProducerStatus,
};
use crate::producers::wait::StopWait;

/// Manufactures one random-id `Item` per cycle and blocking-enqueues it,
/// pacing cycles with a cancelable interval sleep. Runs on its own thread
/// until stopped; Stopped is terminal.
pub struct ItemProducer {
    name: String,
    state: Arc<AtomicU8>,
    items_produced: Arc<AtomicU64>,
    buffer: Option<Arc<BoundedBuffer<Item>>>,
    interval: Duration,
    stop_wait: Arc<StopWait>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

impl ItemProducer {
    pub fn new(name: &str, interval: Duration) -> Self {
        Self {
            name: name.to_string(),
            state: Arc::new(AtomicU8::new(ProducerState::Idle as u8)),
            items_produced: Arc::new(AtomicU64::new(0)),
            buffer: None,
            interval,
            stop_wait: Arc::new(StopWait::new()),
            thread_handle: None,
        }
    }

    fn state_now(&self) -> ProducerState {
        ProducerState::from_u8(self.state.load(Ordering::SeqCst))
    }
}

impl ComponentLogger for ItemProducer {
    fn log_context(&self) -> LogContext {
        LogContext::new("Producer", &self.name)
    }
}

struct Worker {
    name: String,
    state: Arc<AtomicU8>,
    items_produced: Arc<AtomicU64>,
    buffer: Arc<BoundedBuffer<Item>>,
    interval: Duration,
    stop_wait: Arc<StopWait>,
}

impl ComponentLogger for Worker {
    fn log_context(&self) -> LogContext {
        LogContext::new("Producer", &self.name)
    }
}

impl Worker {
    fn run(self) {
        while ProducerState::from_u8(self.state.load(Ordering::SeqCst)) == ProducerState::Running
        {
            let item = Item::with_random_id();
            let rendered = item.to_string();

            match self.buffer.put(item) {
                Ok(()) => {
                    self.items_produced.fetch_add(1, Ordering::Relaxed);
                    self.info(&format!("Produced: {}", rendered));
                }
                Err(LineError::Canceled) => {
                    // clean unwind of a blocked enqueue, nothing to recover
                    self.debug("enqueue canceled, leaving production loop");
                    break;
                }
                Err(err) => {
                    self.error(&format!("enqueue failed: {}", err));
                    break;
                }
            }

            self.stop_wait.wait_timeout(self.interval);
        }

        self.state
            .store(ProducerState::Stopped as u8, Ordering::SeqCst);
        self.debug("production loop stopped");
    }
}

impl Producer for ItemProducer {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&mut self) -> anyhow::Result<()> {
        match self.state_now() {
            ProducerState::Running => return Ok(()),
            ProducerState::Stopping | ProducerState::Stopped => {
                return Err(LineError::NotRestartable {
                    name: self.name.clone(),
                }
                .into());
            }
            ProducerState::Idle => {}
        }

        let buffer = self
            .buffer
            .clone()
            .ok_or_else(|| LineError::message("no buffer attached"))?;

        self.state
            .store(ProducerState::Running as u8, Ordering::SeqCst);

        let worker = Worker {
            name: self.name.clone(),
            state: self.state.clone(),
            items_produced: self.items_produced.clone(),
            buffer,
            interval: self.interval,
            stop_wait: self.stop_wait.clone(),
        };

        self.info(&format!(
            "starting, interval={}ms",
            self.interval.as_millis()
        ));
        self.thread_handle = Some(thread::spawn(move || worker.run()));
        Ok(())
    }

    fn stop(&mut self) -> anyhow::Result<()> {
        match self.state_now() {
            ProducerState::Idle => {
                self.state
                    .store(ProducerState::Stopped as u8, Ordering::SeqCst);
                return Ok(());
            }
            ProducerState::Stopped => return Ok(()),
            ProducerState::Running | ProducerState::Stopping => {}
        }

        self.state
            .store(ProducerState::Stopping as u8, Ordering::SeqCst);

        // Unblock a put stuck on a full buffer and cut the interval sleep
        // short, then wait for the loop to unwind.
        if let Some(buffer) = &self.buffer {
            buffer.cancel();
        }
        self.stop_wait.notify_all();

        if let Some(handle) = self.thread_handle.take() {
            handle
                .join()
                .map_err(|_| LineError::message("producer thread panicked"))?;
        }

        self.state
            .store(ProducerState::Stopped as u8, Ordering::SeqCst);
        self.info(&format!(
            "stopped after {} items",
            self.items_produced.load(Ordering::Relaxed)
        ));
        Ok(())
    }

    fn status(&self) -> ProducerStatus {
        let state = self.state_now();
        ProducerStatus {
            state,
            running: state == ProducerState::Running,
            items_produced: self.items_produced.load(Ordering::Relaxed),
            buffer_stats: self.buffer.as_ref().map(|b| b.stats()),
        }
    }

    fn attach_buffer(&mut self, buffer: Arc<BoundedBuffer<Item>>) {
        self.buffer = Some(buffer);
    }
}

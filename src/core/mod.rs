pub mod buffer;
pub mod error;
pub mod item;
pub mod session;
pub mod timestamp;

pub use buffer::{BoundedBuffer, BufferStats};
pub use error::{ConfigError, LineError, LineResult};
pub use item::Item;
pub use session::Session;
pub use timestamp::*;

pub trait Producer: Send + Sync {
    fn name(&self) -> &str;
    fn start(&mut self) -> anyhow::Result<()>;
    fn stop(&mut self) -> anyhow::Result<()>;
    fn status(&self) -> ProducerStatus;
    fn attach_buffer(&mut self, buffer: std::sync::Arc<BoundedBuffer<Item>>);
}

/// Lifecycle of a producer. Stopped is terminal; a new session builds a
/// fresh producer/buffer pair instead of restarting this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProducerState {
    Idle = 0,
    Running = 1,
    Stopping = 2,
    Stopped = 3,
}

impl ProducerState {
    pub fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Idle,
            1 => Self::Running,
            2 => Self::Stopping,
            _ => Self::Stopped,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProducerStatus {
    pub state: ProducerState,
    pub running: bool,
    pub items_produced: u64,
    pub buffer_stats: Option<BufferStats>,
}

pub mod logging;
pub use logging::{ComponentLogger, LogContext};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_producer_status() {
        let status = ProducerStatus {
            state: ProducerState::Running,
            running: true,
            items_produced: 42,
            buffer_stats: None,
        };

        assert!(status.running);
        assert_eq!(status.state, ProducerState::Running);
        assert_eq!(status.items_produced, 42);
    }

    #[test]
    fn test_producer_state_round_trip() {
        for state in [
            ProducerState::Idle,
            ProducerState::Running,
            ProducerState::Stopping,
            ProducerState::Stopped,
        ] {
            assert_eq!(ProducerState::from_u8(state as u8), state);
        }
    }
}

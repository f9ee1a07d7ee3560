use std::error::Error as StdError;
use thiserror::Error;

pub type LineResult<T> = Result<T, LineError>;

#[derive(Debug, Error)]
pub enum LineError {
    /// Cooperative unwind of a blocked put/get or a sleeping producer.
    /// Not a failure; callers treat it as a clean abort.
    #[error("operation canceled while waiting on buffer")]
    Canceled,
    #[error("production already started for this session")]
    AlreadyStarted,
    #[error("producer '{name}' has stopped and cannot be restarted")]
    NotRestartable { name: String },
    #[error("{message}")]
    Message { message: String },
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl LineError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    pub fn with_context(
        context: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        LineError::Context {
            context: context.into(),
            source: source.into().into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("buffer capacity must be greater than 0 (got {got})")]
    InvalidCapacity { got: i64 },
    #[error("production interval must be greater than 0 ms")]
    InvalidInterval,
    #[error("{message}")]
    Message { message: String },
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ConfigError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    pub fn with_context<E>(context: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Context {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

use chrono::{DateTime, Local};
use rand::Rng;
use std::fmt;

/// Inclusive range the reference ids are drawn from.
pub const ID_MIN: u32 = 100;
pub const ID_MAX: u32 = 999;

/// Immutable value record manufactured by a producer. Both fields are fixed
/// at construction; ownership moves into the buffer on enqueue.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: u32,
    production_time: DateTime<Local>,
}

impl Item {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            production_time: Local::now(),
        }
    }

    /// Draws an id uniformly from [100, 999]. Plain thread-local RNG, no
    /// cryptographic strength needed.
    pub fn with_random_id() -> Self {
        Self::new(rand::thread_rng().gen_range(ID_MIN..=ID_MAX))
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn production_time(&self) -> DateTime<Local> {
        self.production_time
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item{{productionTime={}, id={}}}",
            self.production_time.format("%Y-%m-%dT%H:%M:%S%.3f"),
            self.id
        )
    }
}

pub mod item;
pub mod wait;

pub use item::ItemProducer;
pub use wait::StopWait;

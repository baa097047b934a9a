pub mod adapter_like;
pub mod bounded;
pub mod container_common;
pub mod queue;
pub mod stack;

mod render;

pub use adapter_like::AdapterLike;
pub use bounded::{Bounded, CapacityError};
pub use container_common::ContainerCommon;
pub use queue::{Queue, QueueLike};
pub use stack::{Stack, StackLike};

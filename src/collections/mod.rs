#[cfg(feature = "collections_adapter")]
pub mod adapter;
#[cfg(feature = "collections_adapter")]
pub use adapter::{
    AdapterLike, Bounded, CapacityError, ContainerCommon, Queue, QueueLike, Stack, StackLike,
};

pub mod dual_stack;

pub use dual_stack::DualStack;

use crate::collections::adapter::ContainerCommon;

/// Access pattern shared by [`Stack`](super::Stack) and [`Queue`](super::Queue): elements go in
/// with `put` and come out one at a time with `take`, in an order fixed by the implementor.
pub trait AdapterLike<T>: ContainerCommon {
    type PushError;

    fn put(&mut self, value: T) -> Result<(), Self::PushError>;

    /// The element the next `take` would return.
    fn peek(&self) -> Option<&T>;

    fn take(&mut self) -> Option<T>;

    fn remove_all(&mut self);
}

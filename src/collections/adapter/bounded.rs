use std::convert::Infallible;

use crate::collections::adapter::{ContainerCommon, QueueLike, StackLike};

/// Returned when a [`Bounded`] container has no room left. Holds the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("container is full (capacity is {capacity})")]
pub struct CapacityError<T> {
    pub value: T,
    pub capacity: usize,
}

impl<T> CapacityError<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Caps an unbounded container at `limit` elements.
#[derive(Debug, Clone)]
pub struct Bounded<Container> {
    container: Container,
    limit: usize,
}

impl<Container: ContainerCommon + Default> Bounded<Container> {
    #[inline]
    pub fn new(limit: usize) -> Self {
        Self {
            container: Default::default(),
            limit,
        }
    }
}

impl<Container: ContainerCommon> Bounded<Container> {
    /// Fails if `container` already holds more than `limit` elements.
    pub fn from_container(
        container: Container,
        limit: usize,
    ) -> Result<Self, CapacityError<Container>> {
        if container.len() > limit {
            return Err(CapacityError {
                value: container,
                capacity: limit,
            });
        }
        Ok(Self { container, limit })
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn inner(&self) -> &Container {
        &self.container
    }

    #[inline]
    pub fn into_inner(self) -> Container {
        self.container
    }

    #[inline]
    fn check_room<T>(&self, value: T) -> Result<T, CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError {
                value,
                capacity: self.limit,
            });
        }
        Ok(value)
    }
}

impl<Container: ContainerCommon> ContainerCommon for Bounded<Container> {
    #[inline]
    fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    fn capacity(&self) -> Option<usize> {
        let limit = self.limit;
        Some(self.container.capacity().map_or(limit, |inner| inner.min(limit)))
    }
}

impl<T, Container: StackLike<T, PushError = Infallible>> StackLike<T> for Bounded<Container> {
    type PushError = CapacityError<T>;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        let value = self.check_room(value)?;
        let Ok(()) = self.container.push(value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.container.pop()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.container.top()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.container.top_mut()
    }

    #[inline]
    fn clear(&mut self) {
        StackLike::clear(&mut self.container);
    }

    #[inline]
    fn bottom_to_top<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.container.bottom_to_top()
    }
}

impl<T, Container: QueueLike<T, PushError = Infallible>> QueueLike<T> for Bounded<Container> {
    type PushError = CapacityError<T>;

    #[inline]
    fn push_back(&mut self, value: T) -> Result<(), Self::PushError> {
        let value = self.check_room(value)?;
        let Ok(()) = self.container.push_back(value);
        Ok(())
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.container.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.container.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.container.front_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.container.back()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.container.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        QueueLike::clear(&mut self.container);
    }

    #[inline]
    fn front_to_back<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.container.front_to_back()
    }
}

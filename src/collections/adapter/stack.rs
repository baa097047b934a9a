use std::{
    collections::{LinkedList, VecDeque},
    convert::Infallible,
    marker::PhantomData,
};

use crate::collections::adapter::{AdapterLike, ContainerCommon, render};

/// Storage usable behind a [`Stack`]. The top of the stack is the end that `push` appends to.
pub trait StackLike<T>: ContainerCommon {
    type PushError;

    fn push(&mut self, value: T) -> Result<(), Self::PushError>;

    fn pop(&mut self) -> Option<T>;

    fn top(&self) -> Option<&T>;

    fn top_mut(&mut self) -> Option<&mut T>;

    fn clear(&mut self);

    /// Iterates from the oldest element to the most recently pushed one.
    fn bottom_to_top<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

/// LIFO adapter over a [`StackLike`] container.
pub struct Stack<T, Container: StackLike<T> = Vec<T>> {
    container: Container,
    _phantom_data: PhantomData<T>,
}

impl<T> Stack<T> {
    #[inline]
    pub const fn new() -> Self {
        Self::from_container(Vec::new())
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_container(Vec::with_capacity(capacity))
    }
}

impl<T, Container: StackLike<T>> Stack<T, Container> {
    /// Wraps `container` as is. Its last pushed element becomes the top.
    #[inline]
    pub const fn from_container(container: Container) -> Self {
        Self {
            container,
            _phantom_data: PhantomData,
        }
    }

    #[inline]
    pub fn inner(&self) -> &Container {
        &self.container
    }

    #[inline]
    pub fn into_inner(self) -> Container {
        self.container
    }

    /// Pushes onto a container that may refuse the element.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), Container::PushError> {
        self.container.push(value)
    }

    /// Returns the top element, or `None` if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.container.top()
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.container.top_mut()
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.container.pop()
    }

    #[inline]
    pub fn remove_all(&mut self) {
        self.container.clear();
    }

    /// Iterates from bottom to top.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.container.bottom_to_top()
    }
}

impl<T, Container: StackLike<T, PushError = Infallible>> Stack<T, Container> {
    #[inline]
    pub fn push(&mut self, value: T) {
        let Ok(()) = self.container.push(value);
    }
}

impl<T, Container: StackLike<T>> From<Container> for Stack<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::from_container(value)
    }
}

impl<T, Container: StackLike<T> + Default> Default for Stack<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::from_container(Default::default())
    }
}

impl<T, Container: StackLike<T> + Clone> Clone for Stack<T, Container> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_container(self.container.clone())
    }
}

impl<T, Container: StackLike<T> + std::fmt::Debug> std::fmt::Debug for Stack<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack")
            .field("container", &self.container)
            .finish()
    }
}

/// Renders bottom to top, e.g. `[1, 2, 3]` where `3` is the top.
impl<T: std::fmt::Display, Container: StackLike<T>> std::fmt::Display for Stack<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render::write_list(f, self.iter())
    }
}

impl<T, C1, C2> PartialEq<Stack<T, C2>> for Stack<T, C1>
where
    T: PartialEq,
    C1: StackLike<T>,
    C2: StackLike<T>,
{
    #[inline]
    fn eq(&self, other: &Stack<T, C2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, Container: StackLike<T>> Eq for Stack<T, Container> {}

impl<T, Container: StackLike<T, PushError = Infallible>> Extend<T> for Stack<T, Container> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

/// The last yielded item ends up on top.
impl<T, Container> FromIterator<T> for Stack<T, Container>
where
    Container: StackLike<T, PushError = Infallible> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::default();
        stack.extend(iter);
        stack
    }
}

/// Consumes a [`Stack`] by popping, so elements come out top first.
pub struct IntoIter<T, Container: StackLike<T> = Vec<T>> {
    stack: Stack<T, Container>,
}

impl<T, Container: StackLike<T>> Iterator for IntoIter<T, Container> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.stack.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.stack.len();
        (len, Some(len))
    }
}

impl<T, Container: StackLike<T>> ExactSizeIterator for IntoIter<T, Container> {}

impl<T, Container: StackLike<T>> IntoIterator for Stack<T, Container> {
    type Item = T;
    type IntoIter = IntoIter<T, Container>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

impl<T, Container: StackLike<T>> ContainerCommon for Stack<T, Container> {
    #[inline]
    fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    fn capacity(&self) -> Option<usize> {
        self.container.capacity()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.container.is_full()
    }
}

impl<T, Container: StackLike<T>> AdapterLike<T> for Stack<T, Container> {
    type PushError = Container::PushError;

    #[inline]
    fn put(&mut self, value: T) -> Result<(), Self::PushError> {
        self.try_push(value)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.container.top()
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.container.pop()
    }

    #[inline]
    fn remove_all(&mut self) {
        self.container.clear();
    }
}

impl<T> StackLike<T> for Vec<T> {
    type PushError = Infallible;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push(value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn bottom_to_top<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.as_slice().iter()
    }
}

impl<T> StackLike<T> for VecDeque<T> {
    type PushError = Infallible;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn bottom_to_top<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> StackLike<T> for LinkedList<T> {
    type PushError = Infallible;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn bottom_to_top<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

use std::{
    collections::{LinkedList, VecDeque},
    convert::Infallible,
    marker::PhantomData,
};

use crate::collections::{
    DualStack,
    adapter::{AdapterLike, ContainerCommon, render},
};

/// Storage usable behind a [`Queue`].
pub trait QueueLike<T>: ContainerCommon {
    type PushError;

    fn push_back(&mut self, value: T) -> Result<(), Self::PushError>;

    fn pop_front(&mut self) -> Option<T>;

    fn front(&self) -> Option<&T>;

    fn front_mut(&mut self) -> Option<&mut T>;

    fn back(&self) -> Option<&T>;

    fn back_mut(&mut self) -> Option<&mut T>;

    fn clear(&mut self);

    /// Iterates from the next element to leave to the most recently enqueued one.
    fn front_to_back<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

/// FIFO adapter over a [`QueueLike`] container.
///
/// The default backing is a [`VecDeque`], so dequeuing is O(1). A `Vec` backing also works,
/// but every dequeue shifts the remaining elements.
pub struct Queue<T, Container: QueueLike<T> = VecDeque<T>> {
    container: Container,
    _phantom_data: PhantomData<T>,
}

impl<T> Queue<T> {
    #[inline]
    pub const fn new() -> Self {
        Self::from_container(VecDeque::new())
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_container(VecDeque::with_capacity(capacity))
    }
}

impl<T, Container: QueueLike<T>> Queue<T, Container> {
    /// Wraps `container` as is. Its front becomes the front of the queue.
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

    #[inline]
    pub fn try_enqueue(&mut self, value: T) -> Result<(), Container::PushError> {
        self.container.push_back(value)
    }

    /// Returns the front element, or `None` if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.container.front()
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.container.front_mut()
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.container.pop_front()
    }

    #[inline]
    pub fn remove_all(&mut self) {
        self.container.clear();
    }

    /// Iterates from front to back.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.container.front_to_back()
    }
}

impl<T, Container: QueueLike<T, PushError = Infallible>> Queue<T, Container> {
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        let Ok(()) = self.container.push_back(value);
    }
}

impl<T, Container: QueueLike<T>> From<Container> for Queue<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::from_container(value)
    }
}

impl<T, Container: QueueLike<T> + Default> Default for Queue<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::from_container(Default::default())
    }
}

impl<T, Container: QueueLike<T> + Clone> Clone for Queue<T, Container> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_container(self.container.clone())
    }
}

impl<T, Container: QueueLike<T> + std::fmt::Debug> std::fmt::Debug for Queue<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue")
            .field("container", &self.container)
            .finish()
    }
}

/// Renders front to back, e.g. `[1, 2, 3]` where `1` leaves first.
impl<T: std::fmt::Display, Container: QueueLike<T>> std::fmt::Display for Queue<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render::write_list(f, self.iter())
    }
}

impl<T, C1, C2> PartialEq<Queue<T, C2>> for Queue<T, C1>
where
    T: PartialEq,
    C1: QueueLike<T>,
    C2: QueueLike<T>,
{
    #[inline]
    fn eq(&self, other: &Queue<T, C2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, Container: QueueLike<T>> Eq for Queue<T, Container> {}

impl<T, Container: QueueLike<T, PushError = Infallible>> Extend<T> for Queue<T, Container> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.enqueue(value));
    }
}

/// The first yielded item ends up at the front.
impl<T, Container> FromIterator<T> for Queue<T, Container>
where
    Container: QueueLike<T, PushError = Infallible> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::default();
        queue.extend(iter);
        queue
    }
}

/// Consumes a [`Queue`] by dequeuing, front first.
pub struct IntoIter<T, Container: QueueLike<T> = VecDeque<T>> {
    queue: Queue<T, Container>,
}

impl<T, Container: QueueLike<T>> Iterator for IntoIter<T, Container> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, Container: QueueLike<T>> ExactSizeIterator for IntoIter<T, Container> {}

impl<T, Container: QueueLike<T>> IntoIterator for Queue<T, Container> {
    type Item = T;
    type IntoIter = IntoIter<T, Container>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<T, Container: QueueLike<T>> ContainerCommon for Queue<T, Container> {
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

impl<T, Container: QueueLike<T>> AdapterLike<T> for Queue<T, Container> {
    type PushError = Container::PushError;

    #[inline]
    fn put(&mut self, value: T) -> Result<(), Self::PushError> {
        self.try_enqueue(value)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.container.front()
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.container.pop_front()
    }

    #[inline]
    fn remove_all(&mut self) {
        self.container.clear();
    }
}

impl<T> QueueLike<T> for Vec<T> {
    type PushError = Infallible;

    #[inline]
    fn push_back(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push(value);
        Ok(())
    }

    /// O(n): the remaining elements are shifted down by one.
    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        (!self.is_empty()).then(|| self.remove(0))
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.first()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn front_to_back<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.as_slice().iter()
    }
}

impl<T> QueueLike<T> for VecDeque<T> {
    type PushError = Infallible;

    #[inline]
    fn push_back(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn front_to_back<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> QueueLike<T> for LinkedList<T> {
    type PushError = Infallible;

    #[inline]
    fn push_back(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn front_to_back<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> QueueLike<T> for DualStack<T> {
    type PushError = Infallible;

    #[inline]
    fn push_back(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn front_to_back<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario<Container>()
    where
        Container: QueueLike<i32, PushError = Infallible> + Default,
    {
        let mut queue = Queue::<i32, Container>::default();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        for _ in 0..3 {
            assert_eq!(queue.peek(), Some(&1));
            assert_eq!(queue.len(), 3);
        }
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn scenario_on_every_backing() {
        scenario::<VecDeque<i32>>();
        scenario::<Vec<i32>>();
        scenario::<LinkedList<i32>>();
        scenario::<DualStack<i32>>();
    }

    #[test]
    fn dequeues_in_enqueue_order() {
        let mut queue = Queue::new();
        for i in 0..100 {
            queue.enqueue(i);
        }
        let dequeued: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(dequeued, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn interleaved_on_dual_stack() {
        let mut queue: Queue<char, _> = Queue::from(DualStack::new());
        queue.enqueue('a');
        queue.enqueue('b');
        assert_eq!(queue.dequeue(), Some('a'));
        queue.enqueue('c');
        assert_eq!(queue.peek(), Some(&'b'));
        assert_eq!(queue.to_string(), "[b, c]");
        assert_eq!(queue.dequeue(), Some('b'));
        assert_eq!(queue.dequeue(), Some('c'));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn empty_dequeue_is_idempotent() {
        let mut queue = Queue::<String>::new();
        for _ in 0..3 {
            assert_eq!(queue.dequeue(), None);
            assert_eq!(queue.peek(), None);
            assert_eq!(queue.len(), 0);
        }
    }

    #[test]
    fn remove_all_resets_to_fresh() {
        let mut queue: Queue<_> = ["a", "b", "c"].into_iter().collect();
        queue.remove_all();
        assert_eq!(queue, Queue::new());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);
        queue.enqueue("d");
        assert_eq!(queue.dequeue(), Some("d"));
    }

    #[test]
    fn clone_does_not_share_state() {
        let mut a: Queue<_> = (1..=3).collect();
        let b = a.clone();
        a.dequeue();
        a.enqueue(42);
        assert_eq!(b.to_string(), "[1, 2, 3]");
        assert_eq!(a.to_string(), "[2, 3, 42]");
    }

    #[test]
    fn display_front_to_back() {
        let mut queue = Queue::new();
        assert_eq!(queue.to_string(), "[]");
        queue.extend([1, 2, 3]);
        assert_eq!(queue.to_string(), "[1, 2, 3]");
        println!("{:?}", queue);
    }

    #[test]
    fn peek_mut_edits_front() {
        let mut queue: Queue<_> = (1..=3).collect();
        queue.peek_mut().map(|front| *front *= 10);
        assert_eq!(queue.dequeue(), Some(10));
        assert_eq!(queue.peek(), Some(&2));
    }

    #[test]
    fn into_iter_dequeues_from_front() {
        let queue: Queue<_, DualStack<_>> = (1..=4).collect();
        let iter = queue.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3, 4]);
    }

    #[test]
    fn equality_ignores_backing() {
        let a: Queue<_> = (1..=3).collect();
        let b: Queue<_, Vec<_>> = (1..=3).collect();
        let c: Queue<_> = (2..=3).collect();
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn wraps_existing_container() {
        let queue: Queue<i32> = Queue::from(VecDeque::from([1, 2, 3]));
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.inner().back(), Some(&3));
        assert_eq!(queue.into_inner(), [1, 2, 3]);
    }

    #[test]
    fn edits_stay_at_the_ends() {
        let mut queue: Queue<_> = (1..=3).collect();
        queue.peek_mut().map(|front| *front = 10);
        queue.enqueue(4);
        assert_eq!(queue.dequeue(), Some(10));
        assert_eq!(queue.to_string(), "[2, 3, 4]");
        assert_eq!(queue.inner(), &[2, 3, 4]);
        queue.remove_all();
        assert!(queue.inner().is_empty());
    }

    #[test]
    fn with_capacity_starts_empty() {
        let mut queue = Queue::with_capacity(8);
        assert!(queue.is_empty());
        assert!(queue.inner().capacity() >= 8);
        queue.enqueue('x');
        assert_eq!(queue.peek(), Some(&'x'));
    }
}

/// FIFO storage made of two `Vec`s.
///
/// New elements land in `inbox`. `outbox` holds the oldest elements in reverse order, so the
/// front of the queue is `outbox.last()`. `outbox` is refilled from `inbox` only when it runs
/// empty, which keeps [`pop_front`](Self::pop_front) amortized O(1).
#[derive(Clone)]
pub struct DualStack<T> {
    inbox: Vec<T>,
    outbox: Vec<T>,
}

impl<T> DualStack<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            inbox: Vec::new(),
            outbox: Vec::new(),
        }
    }

    /// `capacity` is reserved for the inbox only.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inbox: Vec::with_capacity(capacity),
            outbox: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.inbox.push(value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.outbox.is_empty() {
            self.outbox.extend(self.inbox.drain(..).rev());
        }
        self.outbox.pop()
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.outbox.last().or_else(|| self.inbox.first())
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.outbox.last_mut() {
            Some(value) => Some(value),
            None => self.inbox.first_mut(),
        }
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.inbox.last().or_else(|| self.outbox.first())
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.inbox.last_mut() {
            Some(value) => Some(value),
            None => self.outbox.first_mut(),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.inbox.clear();
        self.outbox.clear();
    }

    /// Iterates from front to back.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.outbox.iter().rev().chain(self.inbox.iter())
    }
}

impl<T> Default for DualStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DualStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DualStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inbox: iter.into_iter().collect(),
            outbox: Vec::new(),
        }
    }
}

impl<T> Extend<T> for DualStack<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inbox.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_insertion_order() {
        let mut q: DualStack<_> = (1..=3).collect();
        assert_eq!(q.pop_front(), Some(1));
        q.push_back(4);
        assert_eq!(q.pop_front(), Some(2));
        assert_eq!(q.pop_front(), Some(3));
        assert_eq!(q.pop_front(), Some(4));
        assert_eq!(q.pop_front(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn ends_span_both_halves() {
        let mut q = DualStack::new();
        q.extend([1, 2, 3]);
        assert_eq!(q.pop_front(), Some(1));
        // outbox now holds [3, 2], inbox is empty
        assert_eq!(q.front(), Some(&2));
        assert_eq!(q.back(), Some(&3));
        q.push_back(4);
        assert_eq!(q.front(), Some(&2));
        assert_eq!(q.back(), Some(&4));
        *q.front_mut().unwrap() = 20;
        *q.back_mut().unwrap() = 40;
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), [20, 3, 40]);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn clone_is_independent() {
        let mut a: DualStack<_> = (1..=3).collect();
        let b = a.clone();
        a.pop_front();
        a.clear();
        assert!(a.is_empty());
        assert_eq!(format!("{:?}", b), "[1, 2, 3]");
    }

    #[test]
    fn with_capacity_starts_empty() {
        let mut q = DualStack::with_capacity(4);
        assert!(q.is_empty());
        assert_eq!(q.front(), None);
        q.push_back(1);
        q.push_back(2);
        assert_eq!(q.pop_front(), Some(1));
        assert_eq!(q.len(), 1);
    }
}

use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with owned nodes, linked from a head
/// pointer to a tail pointer. It allows inserting, removing elements at any
/// given position in constant time. In compromise, accessing or mutating
/// elements at any position take *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `head` to the first node, or nothing if the list is empty;
/// - a pointer `tail` to the last node, or nothing if the list is empty;
/// - a length field `len` with the number of elements.
///
/// The nodes of a non-empty list form a single chain from `head` to `tail`.
/// The first node has no predecessor and the last node has no successor;
/// there is no sentinel node at either end.
pub struct List<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }
    pub(crate) fn back_node(&self) -> Option<NonNull<Node<T>>> {
        self.tail
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    /// An absent `prev` stands for the front boundary of the list, an absent
    /// `next` for the back boundary.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether `prev` and `next` are adjacent (only
    /// in `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the list, or they are not an
    /// adjacent pair, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: Option<NonNull<Node<T>>>,
        next: Option<NonNull<Node<T>>>,
        mut node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        {
            let node = node.as_mut();
            node.prev = prev;
            node.next = next;
        }
        match prev {
            Some(mut prev) => prev.as_mut().next = Some(node),
            None => self.head = Some(node),
        }
        match next {
            Some(mut next) => next.as_mut().prev = Some(node),
            None => self.tail = Some(node),
        }
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(node));
            self.assert_adjacent(Some(node), next);
        }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    /// The neighbors of `node` are linked to each other, and `head`/`tail`
    /// are updated when `node` was at a boundary.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list.
    ///
    /// If the `node` does not belong to the list, this function call will
    /// make the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let node = Box::from_raw(node.as_ptr());
        match node.prev {
            Some(mut prev) => prev.as_mut().next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(mut next) => next.as_mut().prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<NonNull<Node<T>>>, next: Option<NonNull<Node<T>>>) {
        match prev {
            // SAFETY: only called with nodes owned by this list.
            Some(prev) => assert_eq!(unsafe { prev.as_ref().next }, next),
            None => assert_eq!(self.head, next),
        }
        match next {
            // SAFETY: only called with nodes owned by this list.
            Some(next) => assert_eq!(unsafe { next.as_ref().prev }, prev),
            None => assert_eq!(self.tail, prev),
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// No allocation happens until the first element is inserted.
    ///
    /// # Examples
    /// ```
    /// use chain_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Create a `List` with `n` copies of `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_elem(7, 3);
    /// assert_eq!(Vec::from_iter(list), vec![7, 7, 7]);
    ///
    /// let empty = List::<u32>::from_elem(7, 0);
    /// assert!(empty.is_empty());
    /// ```
    pub fn from_elem(elem: T, n: usize) -> Self
    where
        T: Clone,
    {
        std::iter::repeat(elem).take(n).collect()
    }

    /// Create a `List` with `n` default values of `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::<u32>::from_default(3);
    /// assert_eq!(Vec::from_iter(list), vec![0, 0, 0]);
    /// ```
    pub fn from_default(n: usize) -> Self
    where
        T: Default,
    {
        std::iter::repeat_with(T::default).take(n).collect()
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// Calling it on an empty list is a no-op.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    ///
    /// list.clear(); // clearing twice is fine
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by this list, and the yielded
        // reference is covered by the borrow of `self`.
        self.head.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `head` is a live node owned by this list, and the yielded
        // reference is covered by the exclusive borrow of `self`.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is a live node owned by this list, and the yielded
        // reference is covered by the borrow of `self`.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    ///
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `tail` is a live node owned by this list, and the yielded
        // reference is covered by the exclusive borrow of `self`.
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_front_mut().insert(elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.cursor_front_mut().remove()
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        self.cursor_end_mut().backspace()
    }

    /// Replaces the contents of the list with `values`, in order.
    ///
    /// Existing nodes are reused: their elements are overwritten in place.
    /// When `values` produces more elements than the list holds, the excess
    /// is appended with fresh nodes; when it produces fewer, the trailing
    /// nodes are dropped. No node is reallocated unless the list grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.assign([7, 8, 9, 10].iter().copied());
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![7, 8, 9, 10]);
    ///
    /// list.assign(Some(0)); // shrink down to a single element
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![0]);
    ///
    /// list.assign(None); // assigning nothing empties the list
    /// assert!(list.is_empty());
    /// ```
    pub fn assign<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut cursor = self.cursor_front_mut();
        for value in values {
            match cursor.current_mut() {
                Some(slot) => {
                    *slot = value;
                    cursor
                        .move_next()
                        .expect("a cursor on a live node can step forward");
                }
                // The list ran out of nodes: append the rest.
                None => cursor.insert(value),
            }
        }
        cursor.truncate_rest();
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is pointing to the end position if
    /// `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor_at(1).current(), Some(&2));
    /// assert_eq!(list.cursor_at(3).current(), None);
    /// ```
    pub fn cursor_at(&self, at: usize) -> Cursor<'_, T> {
        let mut cursor = self.cursor_front();
        cursor
            .seek_to(at)
            .expect("cannot create a cursor at a nonexistent position");
        cursor
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the end position if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_front();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the end position, one past the last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None, self.len)
    }

    /// Provides a cursor with editing operations at the node with given
    /// index.
    ///
    /// By convention, the cursor is pointing to the end position if
    /// `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_at_mut(1);
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// assert_eq!(list.cursor_at_mut(3).current_mut(), None);
    /// ```
    pub fn cursor_at_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_front_mut();
        cursor
            .seek_to(at)
            .expect("cannot create a cursor at a nonexistent position");
        cursor
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is pointing to the end position if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_front_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.front_node();
        CursorMut::new(self, current, 0)
    }

    /// Provides a cursor with editing operations at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// if let Some(x) = cursor.previous_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.previous(), Some(&15));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        CursorMut::new(self, None, len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Adds an element at the given index in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4);
    /// list.insert(4, 5);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) {
        self.cursor_at_mut(at).insert(elt);
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_front(3);
    ///
    /// assert_eq!(list.remove(1), 2);
    /// assert_eq!(list.remove(0), 3);
    /// assert_eq!(list.remove(0), 1);
    /// ```
    pub fn remove(&mut self, at: usize) -> T {
        assert!(
            at < self.len,
            "cannot remove at an index outside of the list bounds"
        );
        self.cursor_at_mut(at)
            .remove()
            .expect("cannot remove at an index outside of the list bounds")
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Allocate a node holding `element`, not yet linked into any list.
    ///
    /// The allocation happens before any link of the list is touched, so a
    /// failed allocation leaves the list exactly as it was.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            element,
        })))
    }

    pub(crate) fn into_element(node: Box<Node<T>>) -> T {
        node.element
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the list in both directions and assert every structural
    /// invariant: consistent `head`/`tail`/`len`, no unmatched links, and
    /// bidirectional agreement of every adjacent pair.
    pub(crate) fn check_invariants(&self) {
        let (head, tail) = match (self.head, self.tail) {
            (None, None) => {
                assert_eq!(self.len, 0, "an empty list must have length 0");
                return;
            }
            (Some(head), Some(tail)) => (head, tail),
            _ => panic!("one end of the list is linked, the other is not"),
        };
        assert!(self.len > 0, "a linked list head implies a nonzero length");
        if self.len == 1 {
            assert_eq!(head, tail);
        }
        unsafe {
            assert_eq!(head.as_ref().prev, None);
            assert_eq!(tail.as_ref().next, None);

            let mut count = 1;
            let mut node = head;
            while let Some(next) = node.as_ref().next {
                assert_eq!(next.as_ref().prev, Some(node));
                node = next;
                count += 1;
            }
            assert_eq!(node, tail, "forward traversal must end at the tail");
            assert_eq!(count, self.len, "forward traversal must count `len` nodes");

            let mut count = 1;
            let mut node = tail;
            while let Some(prev) = node.as_ref().prev {
                assert_eq!(prev.as_ref().next, Some(node));
                node = prev;
                count += 1;
            }
            assert_eq!(node, head, "backward traversal must end at the head");
            assert_eq!(count, self.len, "backward traversal must count `len` nodes");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_push_order() {
        let mut list = List::new();
        list.push_back('a');
        list.push_back('b');
        list.push_back('c');
        assert_eq!(Vec::from_iter(list.iter().copied()), vec!['a', 'b', 'c']);

        let mut list = List::new();
        list.push_front('a');
        list.push_front('b');
        list.push_front('c');
        assert_eq!(Vec::from_iter(list.iter().copied()), vec!['c', 'b', 'a']);
    }

    #[test]
    fn list_pop_until_empty() {
        let mut list = List::from_iter(0..4);
        while list.pop_back().is_some() {}
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        // Popping an already-empty list keeps refusing politely.
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
        list.check_invariants();
    }

    #[test]
    fn list_insert_and_remove() {
        fn list_eq<T, I>(list: &List<T>, expected: I)
        where
            T: Debug + Clone + Eq,
            I: IntoIterator<Item = T>,
        {
            assert_eq!(
                Vec::from_iter(list.iter().cloned()),
                Vec::from_iter(expected)
            );
        }

        let mut list = List::from_iter(0..10);
        list.insert(5, 10);
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove(10), 9);
        assert_eq!(list.back(), Some(&8));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(0, 11);
        assert_eq!(list.front(), Some(&11));
        list_eq(&list, (11..=11).chain((0..5).chain(Some(10)).chain(5..9)));

        assert_eq!(list.remove(0), 11);
        assert_eq!(list.front(), Some(&0));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(10, 12);
        assert_eq!(list.back(), Some(&12));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));
    }

    #[test]
    fn cursor_insert_remove_round_trip() {
        let mut list = List::from_iter([1, 2, 3]);

        let mut cursor = list.cursor_at_mut(1);
        cursor.insert(99);
        assert_eq!(cursor.previous(), Some(&99));
        assert_eq!(list, List::from([1, 99, 2, 3]));
        list.check_invariants();

        let mut cursor = list.cursor_at_mut(1);
        assert_eq!(cursor.current(), Some(&99));
        assert_eq!(cursor.remove(), Some(99));
        // The cursor ends up at the element that followed the removed one.
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(list, List::from([1, 2, 3]));
        list.check_invariants();
    }

    #[test]
    fn list_assign() {
        // Growing, shrinking and clearing through `assign`, starting from
        // every combination of old and new length.
        for old_len in 0..5 {
            for new_len in 0..5 {
                let mut list = List::from_iter(0..old_len);
                list.assign(100..100 + new_len);
                list.check_invariants();
                assert_eq!(list.len() as i32, new_len);
                assert!(list.iter().copied().eq(100..100 + new_len));
            }
        }
    }

    #[test]
    fn list_from_elem_and_default() {
        let list = List::from_elem("x", 4);
        assert_eq!(list.len(), 4);
        assert!(list.iter().all(|s| *s == "x"));
        list.check_invariants();

        let list = List::<i64>::from_default(3);
        assert!(list.iter().all(|v| *v == 0));
        assert_eq!(list.len(), 3);

        let list = List::<i64>::from_default(0);
        assert!(list.is_empty());
    }

    #[test]
    fn list_swap() {
        let mut a = List::from_iter([1, 2]);
        let mut b = List::from_iter([9]);
        std::mem::swap(&mut a, &mut b);
        assert_eq!(Vec::from_iter(a.iter().copied()), vec![9]);
        assert_eq!(Vec::from_iter(b.iter().copied()), vec![1, 2]);
        a.check_invariants();
        b.check_invariants();

        // Swapping with an empty list moves the chain wholesale.
        let mut c = List::new();
        std::mem::swap(&mut b, &mut c);
        assert!(b.is_empty());
        assert_eq!(Vec::from_iter(c.iter().copied()), vec![1, 2]);
    }

    #[test]
    fn list_move_semantics() {
        let mut list = List::from_iter([1, 2, 3]);
        let moved = std::mem::take(&mut list);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(Vec::from_iter(moved.iter().copied()), vec![1, 2, 3]);
        list.check_invariants();
        moved.check_invariants();
    }

    /// Replays random operation sequences against a `Vec` model, re-checking
    /// every structural invariant after each mutation.
    #[test]
    fn list_random_operations() {
        let mut rng = SmallRng::seed_from_u64(0x11575);
        for _ in 0..32 {
            let mut list: List<u32> = List::new();
            let mut model: Vec<u32> = Vec::new();
            for _ in 0..256 {
                match rng.gen_range(0..12) {
                    0..=2 => {
                        let value = rng.gen();
                        list.push_front(value);
                        model.insert(0, value);
                    }
                    3..=5 => {
                        let value = rng.gen();
                        list.push_back(value);
                        model.push(value);
                    }
                    6 => {
                        let expected = if model.is_empty() {
                            None
                        } else {
                            Some(model.remove(0))
                        };
                        assert_eq!(list.pop_front(), expected);
                    }
                    7 => assert_eq!(list.pop_back(), model.pop()),
                    8 => {
                        let at = rng.gen_range(0..=model.len());
                        let value = rng.gen();
                        list.insert(at, value);
                        model.insert(at, value);
                    }
                    9 => {
                        if !model.is_empty() {
                            let at = rng.gen_range(0..model.len());
                            assert_eq!(list.remove(at), model.remove(at));
                        }
                    }
                    10 => {
                        if !model.is_empty() {
                            let at = rng.gen_range(0..model.len());
                            let value = rng.gen();
                            let mut cursor = list.cursor_at_mut(at);
                            *cursor.current_mut().unwrap() = value;
                            model[at] = value;
                        }
                    }
                    11 => {
                        if rng.gen_ratio(1, 8) {
                            list.clear();
                            model.clear();
                        }
                    }
                    _ => unreachable!(),
                }
                list.check_invariants();
                assert_eq!(list.len(), model.len());
                assert!(list.iter().eq(model.iter()));
                assert!(list.iter().rev().eq(model.iter().rev()));
            }
        }
    }
}

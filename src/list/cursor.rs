use crate::list::{List, Node};
use std::fmt::{self, Formatter};
use std::ptr::NonNull;
use thiserror::Error;

/// Error returned when a cursor is asked to move outside the valid range of
/// positions of its list.
///
/// The refused motion leaves the cursor where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The cursor is at the end position and cannot move forward.
    #[error("cannot move a cursor forward past the end of the list")]
    ForwardPastEnd,
    /// The cursor is at the front node (or the list is empty) and cannot
    /// move backward.
    #[error("cannot move a cursor backward past the front of the list")]
    BackwardPastFront,
    /// A seek asked for a position beyond the end of the list.
    #[error("seek target {target} is out of bounds for a list of length {len}")]
    SeekOutOfBounds { target: usize, len: usize },
}

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is the end position one past
/// the last element. At the end position the cursor references no node and
/// [`current`] returns `None`.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The end position
/// is denoted by `#`).
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at front: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_front();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor at the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // Moving forward from the end position is refused.
/// let mut cursor = list.cursor_end();
/// assert!(cursor.move_next().is_err());
/// assert_eq!(cursor.current(), None);
/// ```
///
/// [`current`]: Cursor::current
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    index: usize,
    pub(crate) current: Option<NonNull<Node<T>>>,
    pub(crate) list: &'a List<T>,
}

/// Compare cursors by their positions.
///
/// Only cursors belonging to the same list and located at the same position
/// are considered equal.
///
/// # Examples
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_front();
/// let mut cursor2 = cursor1.clone();
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next().unwrap();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_front();
/// // Different lists are never equal.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek
/// back-and-forth, and can safely mutate the list during iteration. This is
/// because the lifetime of its yielded references is tied to its own
/// lifetime, instead of just the underlying list. This means cursors cannot
/// yield multiple elements at once.
///
/// The exclusive borrow is also what keeps every position valid: while a
/// `CursorMut` exists, nodes can only be removed through it, so the cursor
/// can never be left referencing a freed node.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily
/// borrow the list and returns an immutable reference whose lifetime is
/// shorter than the cursor. See the documents for details.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is the end position one past
/// the last element.
///
/// # Examples
///
/// ```compile_fail
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_front_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    pub(crate) current: Option<NonNull<Node<T>>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn next_node(&self) -> Option<NonNull<Node<T>>> {
                // SAFETY: nodes referenced by a cursor are owned by its list
                // and stay allocated while the cursor borrows the list.
                self.current.and_then(|node| unsafe { node.as_ref().next })
            }
            /// The node before the cursor position: the predecessor of the
            /// current node, or the tail when the cursor is at the end
            /// position.
            pub(crate) fn prev_node(&self) -> Option<NonNull<Node<T>>> {
                match self.current {
                    // SAFETY: nodes referenced by a cursor are owned by its
                    // list and stay allocated while the cursor borrows the
                    // list.
                    Some(node) => unsafe { node.as_ref().prev },
                    None => self.list.back_node(),
                }
            }

            /// Move forward the cursor by given steps, without checking
            /// whether it will run over the end position.
            ///
            /// It is unsafe because if the moving runs over the end
            /// position, the cursor position becomes invalid.
            unsafe fn seek_forward_fast(&mut self, steps: usize) {
                self.index += steps;
                (0..steps).for_each(|_| self.current = self.next_node());
            }

            /// Move backward the cursor by given steps, without checking
            /// whether it will run over the front node.
            ///
            /// It is unsafe because if the moving runs over the front node,
            /// the cursor position becomes invalid.
            unsafe fn seek_backward_fast(&mut self, steps: usize) {
                self.index -= steps;
                (0..steps).for_each(|_| self.current = self.prev_node());
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the index of the cursor, in `0..=len`.
            ///
            /// The end position has index `len`.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position, or return an error when
            /// the cursor is already at the end position.
            ///
            /// On error, the cursor stays put.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_front();
            ///
            /// assert!(cursor.move_next().is_ok());
            /// assert_eq!(cursor.current(), Some(&2));
            ///
            /// // Stepping forward from the end position is refused.
            /// cursor.move_to_end();
            /// assert!(cursor.move_next().is_err());
            /// assert_eq!(cursor.current(), None);
            /// ```
            pub fn move_next(&mut self) -> Result<(), CursorError> {
                match self.current {
                    Some(node) => {
                        // SAFETY: the node is alive while the cursor borrows
                        // the list.
                        self.current = unsafe { node.as_ref().next };
                        self.index += 1;
                        Ok(())
                    }
                    None => Err(CursorError::ForwardPastEnd),
                }
            }

            /// Move the cursor to the previous position, or return an error
            /// when the cursor is already at the front node.
            ///
            /// On error, the cursor stays put.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// assert!(cursor.move_prev().is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Stepping backward from the front node is refused.
            /// cursor.move_to_front();
            /// assert!(cursor.move_prev().is_err());
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_prev(&mut self) -> Result<(), CursorError> {
                match self.prev_node() {
                    Some(node) => {
                        self.current = Some(node);
                        self.index -= 1;
                        Ok(())
                    }
                    None => Err(CursorError::BackwardPastFront),
                }
            }

            /// Move forward the cursor by given steps, or return an error
            /// when the end position would be run over.
            ///
            /// If an error occurs, the cursor stops at the end position.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_front();
            ///
            /// assert!(cursor.seek_forward(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Seeking past the end position is refused.
            /// assert!(cursor.seek_forward(5).is_err());
            /// assert_eq!(cursor.current(), None);
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), CursorError> {
                (0..steps).try_for_each(|_| self.move_next())
            }

            /// Move backward the cursor by given steps, or return an error
            /// when the front node would be run over.
            ///
            /// If an error occurs, the cursor stops at the front node.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// assert!(cursor.seek_backward(3).is_ok());
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// // Seeking past the front node is refused.
            /// let mut cursor = list.cursor_end();
            /// assert!(cursor.seek_backward(5).is_err());
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), CursorError> {
                (0..steps).try_for_each(|_| self.move_prev())
            }

            /// Move the cursor to the given position `target`, or return an
            /// error when `target > len`.
            ///
            /// If an error occurs, the cursor stays put. The seek routes from
            /// whichever of the current position and the two list ends is
            /// nearest to the target.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_front();
            ///
            /// // Move cursor to a valid place (at the third node)
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Refuse to move to a nonexistent place
            /// assert!(cursor.seek_to(5).is_err());
            ///
            /// // The cursor is still at the third node
            /// assert_eq!(cursor.current(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), CursorError> {
                let len = self.list.len;
                if target > len {
                    return Err(CursorError::SeekOutOfBounds { target, len });
                }
                // current=c, target=t, end=#
                if target >= self.index {
                    if target - self.index <= len - target {
                        // target is near the right side of current: [  c-->t    #]
                        // SAFETY: `target <= len` positions exist ahead.
                        unsafe { self.seek_forward_fast(target - self.index) };
                    } else {
                        // target is far from the right side of current: [ c    t<--#]
                        self.move_to_end();
                        // SAFETY: `len - target` positions exist behind the end.
                        unsafe { self.seek_backward_fast(len - target) };
                    }
                } else if self.index - target <= target {
                    // target is near the left side of current: [   t<--c    #]
                    // SAFETY: `target < index` positions exist behind.
                    unsafe { self.seek_backward_fast(self.index - target) };
                } else {
                    // target is far from the left side of current: [-->t     c #]
                    self.move_to_front();
                    // SAFETY: `target <= len` positions exist ahead of the front.
                    unsafe { self.seek_forward_fast(target) };
                }
                Ok(())
            }

            /// Set the cursor to the front of the list (i.e. the first node).
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the end position
            /// assert_eq!(cursor.previous(), Some(&3));
            /// cursor.move_to_front();
            ///
            /// // The cursor is now at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            #[inline]
            pub fn move_to_front(&mut self) {
                self.index = 0;
                self.current = self.list.front_node();
            }

            /// Set the cursor to the end position of the list.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_front();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// cursor.move_to_end();
            ///
            /// // The cursor is now at the end position
            /// assert_eq!(cursor.current(), None);
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len;
                self.current = None;
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: Option<NonNull<Node<T>>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        self.list as *const _ == other.list as *const _
    }

    /// Return a reference to the element under the cursor, or `None` if the
    /// cursor is at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor_at(0).current(), Some(&1));
    /// assert_eq!(list.cursor_at(1).current(), Some(&2));
    /// assert_eq!(list.cursor_at(2).current(), Some(&3));
    /// assert_eq!(list.cursor_at(3).current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        // SAFETY: the cursor holds a shared borrow of the list for 'a, and
        // no node is deallocated while that borrow lives.
        self.current.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Return a reference to the element before the cursor, or `None` if the
    /// cursor is at the front node.
    ///
    /// This is useful when using the cursor as a reversed cursor. See
    /// [`CursorBackIter`] for details.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor_at(0).previous(), None);
    /// assert_eq!(list.cursor_at(1).previous(), Some(&1));
    /// assert_eq!(list.cursor_at(2).previous(), Some(&2));
    /// assert_eq!(list.cursor_at(3).previous(), Some(&3));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        // SAFETY: the cursor holds a shared borrow of the list for 'a, and
        // no node is deallocated while that borrow lives.
        self.prev_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut List<T>,
        current: Option<NonNull<Node<T>>>,
        index: usize,
    ) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    fn is_end(&self) -> bool {
        self.current.is_none()
    }
}

// Methods that do not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return a reference to the element under the cursor, or `None` if the
    /// cursor is at the end position.
    pub fn current(&self) -> Option<&T> {
        // SAFETY: the current node is owned by the borrowed list, and the
        // yielded reference is covered by the borrow of `self`.
        self.current.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Return a mutable reference to the element under the cursor, or
    /// `None` if the cursor is at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// // Create a cursor and mutate the element under it.
    /// let mut cursor = list.cursor_at_mut(0);
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // There is nothing to mutate at the end position.
    /// assert!(list.cursor_at_mut(3).current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the current node is owned by the exclusively borrowed
        // list, and the yielded reference is covered by the exclusive borrow
        // of `self`.
        self.current
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Return a reference to the element before the cursor, or `None` if the
    /// cursor is at the front node.
    pub fn previous(&self) -> Option<&T> {
        // SAFETY: as in `current`.
        self.prev_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Return a mutable reference to the element before the cursor, or
    /// `None` if the cursor is at the front node.
    ///
    /// This is useful when using the cursor as a reversed cursor. See
    /// [`CursorBackIterMut`] for details.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_at_mut(3);
    /// *cursor.previous_mut().unwrap() *= 5;
    /// assert_eq!(cursor.previous(), Some(&15));
    ///
    /// // There is nothing before the front node.
    /// assert!(list.cursor_at_mut(0).previous_mut().is_none());
    /// ```
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `current_mut`.
        self.prev_node()
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// This is useful where the list is not able to be read while a mutable
    /// cursor is alive. This method provides an ability of temporarily
    /// reading the list.
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
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().back(), Some(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(Vec::from_iter(list), vec![4, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Add an element first in the list.
    ///
    /// It is the same as [`List::push_front`], except it avoids another
    /// mutable borrow of the list while the mutable cursor is being used.
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
    /// cursor.insert(4);
    /// // Won't compile because list is already mutably borrowed,
    /// // and the cursor is used later.
    /// // list.push_front(0);
    /// cursor.push_front(0);
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.previous(), Some(&4));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn push_front(&mut self, item: T) {
        self.list.push_front(item);
        self.index += 1;
    }

    /// Remove the first element and return it, or `None` if the list is
    /// empty.
    ///
    /// It is the same as [`List::pop_front`], except it avoids another
    /// mutable borrow of the list while the mutable cursor is being used.
    /// If the cursor is at the front node, it moves to the next position,
    /// like [`remove`](CursorMut::remove).
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
    /// cursor.insert(4); // becomes [1, 2, 3, 4], points to # (the end position)
    /// assert_eq!(cursor.previous(), Some(&4));
    /// assert_eq!(cursor.pop_front(), Some(1)); // becomes [2, 3, 4], points to #
    /// assert_eq!(cursor.index(), 3);
    /// assert_eq!(cursor.previous(), Some(&4));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![2, 3, 4]);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.index == 0 {
            // The cursor sits on the node being popped (or the list is
            // empty); `remove` advances it to the new front.
            self.remove()
        } else {
            self.index -= 1;
            self.list.pop_front()
        }
    }

    /// Append an element to the back of the list.
    ///
    /// It is the same as [`List::push_back`], except it avoids another
    /// mutable borrow of the list while the mutable cursor is being used.
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
    /// cursor.insert(0);
    /// // Won't compile because list is already mutably borrowed,
    /// // and the cursor is used later.
    /// // list.push_back(4);
    /// cursor.push_back(4);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn push_back(&mut self, item: T) {
        self.list.push_back(item);
        if self.is_end() {
            // The end position follows the new tail.
            self.index += 1;
        }
    }

    /// Remove the last element from the list and return it, or `None` if it
    /// is empty.
    ///
    /// It is the same as [`List::pop_back`], except it avoids another
    /// mutable borrow of the list while the mutable cursor is being used.
    /// If the cursor is at the tail node, it moves to the end position, like
    /// [`remove`](CursorMut::remove).
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
    /// cursor.insert(0);
    /// assert_eq!(cursor.pop_back(), Some(3));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2]);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.current.is_some() && self.current == self.list.back_node() {
            // The cursor sits on the node being popped; `remove` advances it
            // to the end position.
            self.remove()
        } else {
            let item = self.list.pop_back();
            if item.is_some() && self.is_end() {
                // The end position follows the shrunken tail.
                self.index -= 1;
            }
            item
        }
    }

    /// Add an element before the cursor position.
    ///
    /// After insertion, the cursor keeps referring to the same node, with
    /// the new node as its predecessor, and its `index` becomes `index + 1`.
    /// When the cursor is at the front node, the new node becomes the head
    /// of the list; when it is at the end position, the new node becomes the
    /// tail.
    ///
    /// This operation should compute in *O*(1) time.
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
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.previous(), Some(&4)); // the new node is just behind
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.previous(), Some(&5));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, item: T) {
        let node = Node::new_detached(item);
        let prev = self.prev_node();
        // SAFETY: `prev` and `current` are an adjacent pair of positions in
        // this cursor's list.
        unsafe { self.list.attach_node(prev, self.current, node) };
        self.index += 1;
    }

    /// Remove the element under the cursor and return it, or return `None`
    /// if the cursor is at the end position. After removal, the cursor is
    /// moved to the following node (the end position if the tail was
    /// removed) and its `index` is unchanged.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_at_mut(5);
    ///
    /// assert_eq!(cursor.remove(), Some(5)); // becomes [0, 1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// cursor.move_to_front();
    /// assert_eq!(cursor.remove(), Some(0)); // becomes [1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 0);
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    /// assert_eq!(cursor.index(), 8);
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 6, 7, 8, 9]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        let node = self.current?;
        // SAFETY: `node` is a live node owned by this cursor's list, and the
        // cursor leaves it for its successor before the detach.
        let node = unsafe {
            self.current = node.as_ref().next;
            self.list.detach_node(node)
        };
        Some(Node::into_element(node))
    }

    /// Remove the element before the cursor and return it, or return `None`
    /// if the cursor is at the front node. After removal, the cursor keeps
    /// referring to the same node, but its `index` becomes `index - 1`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_at_mut(5);
    ///
    /// assert_eq!(cursor.backspace(), Some(4)); // becomes [0, 1, 2, 3, 5, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 4);
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// cursor.move_to_front();
    /// assert_eq!(cursor.backspace(), None);
    /// assert_eq!(cursor.index(), 0);
    /// assert_eq!(cursor.current(), Some(&0));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.backspace(), Some(9)); // becomes [0, 1, 2, 3, 5, 6, 7, 8]
    /// assert_eq!(cursor.index(), 8);
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }

    /// Remove every element from the cursor position to the end of the
    /// list. Afterwards the cursor is at the end position.
    ///
    /// This operation should compute in *O*(*k*) time, where *k* is the
    /// number of removed elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_at_mut(5);
    ///
    /// cursor.truncate_rest();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.index(), 5);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn truncate_rest(&mut self) {
        while self.remove().is_some() {}
    }
}

/// `CursorIter` provides a cursor-like iterator over the remainder of the
/// list, yielding the element under the cursor and then stepping forward.
///
/// If you are looking for container-like iterators, see [`Iter`] and
/// [`IterMut`] for details.
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// // Create a cursor iterator
/// let mut cursor_iter = list.cursor_front().into_iter();
/// assert_eq!(cursor_iter.next(), Some(&1));
/// assert_eq!(cursor_iter.next(), Some(&2));
/// assert_eq!(cursor_iter.next(), Some(&3));
/// assert_eq!(cursor_iter.next(), None);
///
/// // Convert back to a cursor, now at the end position
/// let cursor = cursor_iter.into_cursor();
/// assert_eq!(cursor.current(), None);
/// ```
///
/// [`Iter`]: crate::Iter
/// [`IterMut`]: crate::IterMut
pub struct CursorIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

/// `CursorIterMut` provides a cursor-like mutable iterator over the
/// remainder of the list.
///
/// If you are looking for container-like iterators, see [`Iter`] and
/// [`IterMut`] for details.
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// // Create a mutable cursor iterator
/// let mut cursor_iter = list.cursor_front_mut().into_iter();
/// *cursor_iter.next().unwrap() *= 5;
/// *cursor_iter.next().unwrap() *= 5;
/// *cursor_iter.next().unwrap() *= 5;
/// assert_eq!(cursor_iter.next(), None);
///
/// // Convert back to a cursor
/// let mut cursor = cursor_iter.into_cursor_mut();
/// assert_eq!(cursor.previous(), Some(&15));
/// assert_eq!(Vec::from_iter(list), vec![5, 10, 15]);
/// ```
///
/// [`Iter`]: crate::Iter
/// [`IterMut`]: crate::IterMut
pub struct CursorIterMut<'a, T: 'a> {
    pub(crate) cursor: CursorMut<'a, T>,
}

/// `CursorBackIter` is largely the same as [`CursorIter`], except that the
/// cursor moves in the opposite direction, stepping backward first and then
/// yielding the element it arrived at.
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// // Create a cursor back iterator
/// let mut cursor_iter = list.cursor_end().into_iter().rev();
/// assert_eq!(cursor_iter.next(), Some(&3));
/// assert_eq!(cursor_iter.next(), Some(&2));
/// assert_eq!(cursor_iter.next(), Some(&1));
/// assert_eq!(cursor_iter.next(), None);
///
/// // Convert back to a cursor, now at the front node
/// let cursor = cursor_iter.into_cursor();
/// assert_eq!(cursor.current(), Some(&1));
/// ```
pub struct CursorBackIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

/// `CursorBackIterMut` is largely the same as [`CursorIterMut`], except that
/// the cursor moves in the opposite direction, stepping backward first and
/// then yielding the element it arrived at.
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// // Create a mutable cursor back iterator
/// let mut cursor_iter = list.cursor_end_mut().into_iter().rev();
/// *cursor_iter.next().unwrap() *= 5;
/// *cursor_iter.next().unwrap() *= 5;
/// assert_eq!(cursor_iter.next(), Some(&mut 1));
/// assert_eq!(cursor_iter.next(), None);
///
/// assert_eq!(Vec::from_iter(list), vec![1, 10, 15]);
/// ```
pub struct CursorBackIterMut<'a, T: 'a> {
    pub(crate) cursor: CursorMut<'a, T>,
}

impl<'a, T: 'a> CursorIter<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }
    pub fn rev(self) -> CursorBackIter<'a, T> {
        CursorBackIter {
            cursor: self.cursor,
        }
    }
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.current()
    }
}

impl<'a, T: 'a> CursorIterMut<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor.into_cursor()
    }
    pub fn into_cursor_mut(self) -> CursorMut<'a, T> {
        self.cursor
    }
    pub fn rev(self) -> CursorBackIterMut<'a, T> {
        CursorBackIterMut {
            cursor: self.cursor,
        }
    }
    pub fn peek(&mut self) -> Option<&mut T> {
        self.cursor.current_mut()
    }
}

impl<'a, T: 'a> CursorBackIter<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }
    pub fn rev(self) -> CursorIter<'a, T> {
        CursorIter {
            cursor: self.cursor,
        }
    }
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.previous()
    }
}

impl<'a, T: 'a> CursorBackIterMut<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor.into_cursor()
    }
    pub fn into_cursor_mut(self) -> CursorMut<'a, T> {
        self.cursor
    }
    pub fn rev(self) -> CursorIterMut<'a, T> {
        CursorIterMut {
            cursor: self.cursor,
        }
    }
    pub fn peek(&mut self) -> Option<&mut T> {
        self.cursor.previous_mut()
    }
}

impl<'a, T: 'a> From<CursorIter<'a, T>> for Cursor<'a, T> {
    fn from(cursor_iter: CursorIter<'a, T>) -> Self {
        cursor_iter.into_cursor()
    }
}

impl<'a, T: 'a> From<CursorIterMut<'a, T>> for CursorMut<'a, T> {
    fn from(cursor_iter: CursorIterMut<'a, T>) -> Self {
        cursor_iter.into_cursor_mut()
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

unsafe impl<T: Sync> Send for CursorIter<'_, T> {}

unsafe impl<T: Sync> Sync for CursorIter<'_, T> {}

unsafe impl<T: Send> Send for CursorIterMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorIterMut<'_, T> {}

unsafe impl<T: Sync> Send for CursorBackIter<'_, T> {}

unsafe impl<T: Sync> Sync for CursorBackIter<'_, T> {}

unsafe impl<T: Send> Send for CursorBackIterMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorBackIterMut<'_, T> {}

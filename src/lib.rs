//! This crate provides a doubly-linked list with owned nodes, linked from a
//! head pointer to a tail pointer.
//!
//! The [`List`] allows inserting and removing elements at any given position
//! in constant time. In compromise, accessing or mutating elements at any
//! position take *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_front_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&1));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 3, 4]));
//!
//! cursor.seek_to(3).unwrap(); // move the cursor to position 3
//! assert_eq!(cursor.remove(), Some(3)); // and remove that element
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 4]));
//!
//! cursor.push_front(5); // pushing front to the list is also allowed
//! assert_eq!(cursor.view(), &List::from_iter([5, 0, 1, 2, 4]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!        ╔═══════════╗           ╔═══════════╗                 ╔═══════════╗
//!        ║   next    ║ ────────→ ║   next    ║ ──→ ┄┄ ───────→ ║   next    ║ ──→ ∅
//!        ╟───────────╢           ╟───────────╢                 ╟───────────╢
//! ∅ ←──  ║   prev    ║ ←──────── ║   prev    ║ ←── ┄┄ ←─────── ║   prev    ║
//!        ╟───────────╢           ╟───────────╢  Node 1, 2, ... ╟───────────╢
//!        ║ payload T ║           ║ payload T ║                 ║ payload T ║
//!        ╚═══════════╝           ╚═══════════╝                 ╚═══════════╝
//!            Node 0                                              Node N - 1
//!              ↑                                                     ↑
//!              │ head                                           tail │
//!        ╔═════╧═════════════════════════════════════════════════════╧═════╗
//!        ║                         List (len = N)                          ║
//!        ╚═══════════════════════════════════════════════════════════════ ═╝
//! ```
//! The `List` contains:
//! - a pointer `head` that points to the first node, or nothing if the list
//!   is empty;
//! - a pointer `tail` that points to the last node, or nothing if the list
//!   is empty;
//! - a length field `len` with the number of elements in the list.
//!
//! Each node of the list `List<T>` is allocated on the heap, and contains:
//! - the `next` pointer that points to the next node, or nothing if it is the
//!   last node in the list;
//! - the `prev` pointer that points to the previous node, or nothing if it is
//!   the first node in the list;
//! - the actual payload `T`.
//!
//! There is *NO* sentinel node: the one-past-the-last position is represented
//! by an empty cursor state, so an empty list performs no allocation at all.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1,
//! ..., *n* - 1, and the end position is indexed by *n*. (In an empty list,
//! the end position is indexed by 0, which is equal to its length 0.)
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended iterators and iterate the list like an array (fused and
//! bounded by the two ends). [`IterMut`] provides mutability of the elements
//! (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list.
//!
//! As the names suggest, they are like cursors and can move forward or
//! backward over the list. In a list with length *n*, there are *n* + 1 valid
//! locations for a cursor, indexed by 0, 1, ..., *n*, where *n* is the end
//! position after the last element.
//!
//! A motion that would leave this range is refused with a [`CursorError`] and
//! the cursor stays put, so walking off either end of the list is always
//! caught:
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//!
//! let mut cursor = list.cursor_front();
//! assert!(cursor.move_prev().is_err()); // refused at the front node
//!
//! let mut cursor = list.cursor_end();
//! assert_eq!(cursor.current(), None); // the end position holds no element
//! assert!(cursor.move_next().is_err()); // refused at the end position
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides many useful ways to mutate the list in any
//! position.
//! - [`insert`]: insert a new item at the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`backspace`]: remove the item before the cursor;
//! - [`truncate_rest`]: remove everything from the cursor to the end.
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_front_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`CursorError`]: crate::CursorError
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace
//! [`truncate_rest`]: crate::list::cursor::CursorMut::truncate_rest

#[doc(inline)]
pub use list::cursor::{Cursor, CursorError, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;

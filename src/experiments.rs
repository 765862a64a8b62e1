//! A prototype of the same head/tail list with no raw pointers: each node is
//! owned half-and-half by the two links that reach it, and the payloads are
//! read through a `GhostToken` instead of `unsafe` dereferences.
//!
//! It only supports editing at the two ends, so the pointer-based [`List`]
//! with its cursors remains the primary implementation; this module stays as
//! a reference point for the borrow-checked construction.
//!
//! [`List`]: crate::List

#![allow(dead_code)]

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

/// Half-owned handle on a node; the other half is held by the neighbor
/// (or the list end) on the opposite side.
type Link<'id, T> = Half<GhostCell<'id, HalfNode<'id, T>>>;

pub struct HalfList<'id, T> {
    /// `ends[FRONT]` is the head, `ends[BACK]` is the tail.
    ends: [Option<Link<'id, T>>; 2],
    len: usize,
}

struct HalfNode<'id, T> {
    /// `links[NEXT]` and `links[PREV]`; the indices are chosen so that
    /// `links[side]` always faces away from the list end `side`.
    links: [Option<Link<'id, T>>; 2],
    value: T,
}

impl<'id, T> HalfNode<'id, T> {
    const NEXT: usize = 0;
    const PREV: usize = 1;

    fn new(value: T) -> Self {
        Self {
            links: [None, None],
            value,
        }
    }
}

impl<'id, T> Default for HalfList<'id, T> {
    fn default() -> Self {
        Self {
            ends: [None, None],
            len: 0,
        }
    }
}

// Side-symmetric internals: `side` is FRONT or BACK, `1 - side` the other.
impl<'id, T> HalfList<'id, T> {
    const FRONT: usize = 0;
    const BACK: usize = 1;

    fn end(&self, side: usize) -> Option<&Link<'id, T>> {
        self.ends[side].as_ref()
    }

    fn push_at(&mut self, side: usize, value: T, token: &mut GhostToken<'id>) {
        let oppo = 1 - side;
        let (inner, outer) = Full::split(Full::new(GhostCell::new(HalfNode::new(value))));
        match self.ends[side].take() {
            Some(old_end) => {
                old_end.deref().borrow_mut(token).links[oppo] = Some(inner);
                outer.deref().borrow_mut(token).links[side] = Some(old_end);
            }
            // First node: the opposite end takes the second half.
            None => self.ends[oppo] = Some(inner),
        }
        self.ends[side] = Some(outer);
        self.len += 1;
    }

    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<T> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let outer = self.ends[side].take()?;
        let inner = match outer.deref().borrow_mut(token).links[side].take() {
            Some(new_end) => {
                let inner = new_end.deref().borrow_mut(token).links[oppo]
                    .take()
                    .expect("adjacent nodes hold each other's halves");
                self.ends[side] = Some(new_end);
                inner
            }
            // Last node: the opposite end holds the second half.
            None => self
                .ends[oppo]
                .take()
                .expect("a single node is held by both ends"),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(inner, outer)).into_inner().value)
    }
}

impl<'id, T> HalfList<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.end(Self::FRONT).is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.end(Self::FRONT)
            .map(|node| &node.deref().borrow(token).value)
    }

    pub fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.end(Self::BACK)
            .map(|node| &node.deref().borrow(token).value)
    }

    pub fn push_front(&mut self, value: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::FRONT, value, token);
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(Self::FRONT, token)
    }

    pub fn push_back(&mut self, value: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::BACK, value, token);
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(Self::BACK, token)
    }

    /// Pop everything. Dropping a non-empty `HalfList` without clearing it
    /// would leak the nodes, as the split halves cannot reclaim the
    /// allocation on their own.
    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::HalfList;
    use ghost_cell::GhostToken;

    #[test]
    fn half_list_push_pop() {
        GhostToken::new(|mut token| {
            let mut list = HalfList::new();
            assert!(list.is_empty());
            list.push_back(1, &mut token);
            list.push_front(2, &mut token);
            assert!(!list.is_empty());
            assert_eq!(list.len(), 2);
            assert_eq!(list.pop_back(&mut token), Some(1));
            assert_eq!(list.pop_front(&mut token), Some(2));
            assert!(list.is_empty());
            assert_eq!(list.len(), 0);
            assert_eq!(list.pop_front(&mut token), None);
        })
    }

    #[test]
    fn half_list_ends() {
        GhostToken::new(|mut token| {
            let mut list = HalfList::new();
            assert_eq!(list.front(&token), None);
            assert_eq!(list.back(&token), None);

            list.push_back('b', &mut token);
            list.push_back('c', &mut token);
            list.push_front('a', &mut token);
            assert_eq!(list.front(&token), Some(&'a'));
            assert_eq!(list.back(&token), Some(&'c'));
            assert_eq!(list.len(), 3);

            list.clear(&mut token);
            assert!(list.is_empty());
        })
    }

    #[test]
    fn half_list_fifo_and_lifo_order() {
        GhostToken::new(|mut token| {
            let mut list = HalfList::new();
            for i in 0..5 {
                list.push_back(i, &mut token);
            }
            for i in 0..5 {
                assert_eq!(list.pop_front(&mut token), Some(i));
            }

            for i in 0..5 {
                list.push_back(i, &mut token);
            }
            for i in (0..5).rev() {
                assert_eq!(list.pop_back(&mut token), Some(i));
            }
            assert!(list.is_empty());
        })
    }
}

use crate::list::List;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Clone `other` into `self`, reusing the nodes of `self` in place.
    ///
    /// Elements are overwritten positionally; nodes only get allocated when
    /// `other` is longer, and the trailing nodes of `self` are dropped when
    /// `other` is shorter.
    fn clone_from(&mut self, other: &Self) {
        let mut cursor = self.cursor_front_mut();
        for elem_other in other.iter() {
            match cursor.current_mut() {
                Some(elem) => {
                    elem.clone_from(elem_other);
                    cursor
                        .move_next()
                        .expect("a cursor on a live node can step forward");
                }
                // `self` ran out of nodes: append the rest.
                None => cursor.insert(elem_other.clone()),
            }
        }
        cursor.truncate_rest();
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_iter(values)
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn list_eq() {
        assert_eq!(List::from_iter(0..3), List::from([0, 1, 2]));
        assert_ne!(List::from_iter(0..3), List::from([0, 1]));
        assert_ne!(List::from_iter(0..3), List::from([0, 1, 3]));
        assert_eq!(List::<i32>::new(), List::from([]));
    }

    #[test]
    fn list_clone_is_independent() {
        let list = List::from_iter([1, 2, 3]);
        let mut cloned = list.clone();
        cloned.push_back(4);
        cloned.push_front(0);
        assert_eq!(list, List::from([1, 2, 3]));
        assert_eq!(cloned, List::from([0, 1, 2, 3, 4]));
    }

    #[test]
    fn list_clone_from() {
        // Every combination of shrinking, growing and clearing.
        for old_len in 0..5u32 {
            for new_len in 0..5u32 {
                let mut list = List::from_iter(0..old_len);
                let other = List::from_iter(100..100 + new_len);
                list.clone_from(&other);
                assert_eq!(list, other);
                list.check_invariants();
            }
        }
    }

    #[test]
    fn list_hash_agrees_with_eq() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let a = List::from_iter(0..4);
        let b = List::from([0, 1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_contains() {
        let list = List::from(["a", "b"]);
        assert!(list.contains(&"a"));
        assert!(!list.contains(&"c"));
    }
}

//! # Generic LIFO stack
//!
//! A last-in-first-out container that works for any element type `T`.
//!
//! ## Key Concepts
//!
//! - **Generics**: one implementation serves `Stack<i32>`, `Stack<String>`, ...
//! - **Absence is not failure**: `pop` and `peek` on an empty stack return
//!   `None`. Underflow never panics and never errors.
//!
//! ```text
//! push(12) push(13) push(14)
//!
//!   top → 14
//!         13
//!         12
//!
//! pop() → Some(14), size() → 2
//! ```

use tracing::trace;

/// A LIFO stack over any element type.
///
/// Insertion order equals push order. The element addressed by [`Stack::peek`]
/// and removed by [`Stack::pop`] is always the most recently pushed element
/// still present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes an item onto the top. Always succeeds.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        trace!(size = self.items.len(), "stack push");
    }

    /// Removes and returns the top item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop();
        trace!(size = self.items.len(), popped = item.is_some(), "stack pop");
        item
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items: pushes minus pops that returned a value.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Items are pushed in iteration order, so the last item ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn push_three_then_pop_one() {
        let mut stack = Stack::new();
        stack.push(12);
        stack.push(13);
        stack.push(14);

        assert_eq!(stack.size(), 3);
        assert_eq!(stack.peek(), Some(&14));

        assert_eq!(stack.pop(), Some(14));
        assert_eq!(stack.size(), 2);
        assert_eq!(stack.peek(), Some(&13));
        assert!(!stack.is_empty());
    }

    #[test]
    fn empty_stack_yields_none() {
        let mut stack: Stack<String> = Stack::default();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.size(), 0);
    }

    #[test]
    fn works_for_non_copy_types() {
        let mut stack = Stack::with_capacity(2);
        stack.push("apple".to_string());
        stack.push("mango".to_string());

        assert_eq!(stack.pop().as_deref(), Some("mango"));
        assert_eq!(stack.pop().as_deref(), Some("apple"));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn collect_puts_last_item_on_top() {
        let stack: Stack<_> = [1, 2, 3].into_iter().collect();
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn debug_lists_items_bottom_to_top() {
        let stack: Stack<_> = [12, 13].into_iter().collect();
        assert_eq!(format!("{stack:?}"), "Stack { items: [12, 13] }");
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut stack: Stack<_> = (0..5).collect();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    proptest! {
        #[test]
        fn pop_returns_most_recent_push(items in prop::collection::vec(any::<i64>(), 1..64)) {
            let mut stack = Stack::new();
            for item in &items {
                stack.push(*item);
            }
            prop_assert_eq!(stack.pop(), items.last().copied());
        }

        #[test]
        fn size_is_pushes_minus_successful_pops(pushes in 0usize..64, pops in 0usize..96) {
            let mut stack = Stack::new();
            for i in 0..pushes {
                stack.push(i);
            }

            let mut successful = 0;
            for _ in 0..pops {
                if stack.pop().is_some() {
                    successful += 1;
                }
            }

            prop_assert_eq!(successful, pops.min(pushes));
            prop_assert_eq!(stack.size(), pushes - successful);
        }

        #[test]
        fn draining_reverses_push_order(items in prop::collection::vec(any::<u8>(), 0..32)) {
            let mut stack: Stack<u8> = items.iter().copied().collect();
            let mut drained = Vec::new();
            while let Some(item) = stack.pop() {
                drained.push(item);
            }
            drained.reverse();
            prop_assert_eq!(drained, items);
        }
    }
}

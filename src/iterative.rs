//! A mutable BST storing each value at most once. Every operation walks the
//! tree iteratively from the root, following the owning `left`/`right` links
//! hand over hand, so no operation recurses as deep as the tree is tall.
//!
//! # Examples
//!
//! ```
//! use bst_set::iterative::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Inserting the same value again reports the duplicate and changes nothing.
//! assert!(!tree.insert(1));
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// An unbalanced Binary Search Tree holding a set of distinct values. This
/// can be used for inserting, finding, and removing values; it never
/// rebalances, so its height depends on the insertion order.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

/// An owning edge. Whoever holds the link can replace the node it points to.
type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // An unbalanced tree can degenerate into a chain far deeper than the call
    // stack, so the nodes are torn down with an explicit stack instead of
    // letting the `Box` chain drop recursively.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` iff the tree holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    ///
    /// tree.remove(&1);
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Potentially finds the given value in this tree. If no node holds an
    /// equal value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Inserts the given value into the tree. Returns `false`, leaving the
    /// tree untouched, when an equal value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *link = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
        true
    }

    /// Removes the node holding the given value from the tree and returns
    /// its value, or `None` when no node holds it. Removing an absent value
    /// leaves the tree untouched, so calling this twice with the same value
    /// yields `None` the second time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let link = Self::find_link(&mut self.root, value)?;
        let node = Self::detach(link);
        self.len -= 1;
        Some(node.value)
    }

    /// Visits the values of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 3, 8, 1] {
    ///     tree.insert(x);
    /// }
    ///
    /// let sorted: Vec<i32> = tree.iter().copied().collect();
    /// assert_eq!(sorted, [1, 3, 5, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Lays the tree out for drawing. Yields one [`Placed`] item per node in
    /// pre-order, with the root centered at `root_x` and each level's
    /// children offset from their parent by half the spread above them.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 3, 8] {
    ///     tree.insert(x);
    /// }
    ///
    /// let mut layout = tree.layout(400, 400);
    ///
    /// let root = layout.next().unwrap();
    /// assert_eq!((root.value, root.depth, root.x, root.parent_x), (&5, 0, 400, None));
    ///
    /// let left = layout.next().unwrap();
    /// assert_eq!((left.value, left.depth, left.x, left.parent_x), (&3, 1, 200, Some(400)));
    /// ```
    pub fn layout(&self, root_x: i32, spacing: i32) -> Layout<'_, T> {
        let stack = self
            .root
            .as_deref()
            .map(|root| Frame {
                node: root,
                depth: 0,
                x: root_x,
                spacing,
                parent_x: None,
            })
            .into_iter()
            .collect();
        Layout { stack }
    }

    /// Walks from `root` to the link that owns the node holding `value`.
    ///
    /// This is the owning-link version of a find-the-node-and-its-parent
    /// search: replacing what the returned link points to is exactly what
    /// updating the parent's child slot (or the tree's root) would do. An
    /// absent value yields `None` rather than anything undefined, so callers
    /// need no pre-check.
    fn find_link<'a>(mut link: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>>
    where
        T: Ord,
    {
        loop {
            match value.cmp(&link.as_ref()?.value) {
                Ordering::Less => link = &mut link.as_mut().expect("compared above").left,
                Ordering::Greater => link = &mut link.as_mut().expect("compared above").right,
                Ordering::Equal => return Some(link),
            }
        }
    }

    /// Detaches the node owned by `link` and returns it, splicing the rest
    /// of its subtree back into `link`.
    ///
    /// A leaf leaves the link empty and a node with one child is replaced by
    /// that child. A node with two children is replaced by its in-order
    /// successor: the successor is detached from its old parent first, then
    /// handed the target's subtrees, then dropped into the link.
    fn detach(link: &mut Link<T>) -> Box<Node<T>> {
        let mut node = link.take().expect("detach targets an occupied link");
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(mut right)) => {
                let mut successor = match Self::detach_leftmost(&mut right) {
                    Some(mut successor) => {
                        successor.right = Some(right);
                        successor
                    }
                    // The right child has no left subtree, so it is the
                    // successor itself and already owns the correct right
                    // subtree.
                    None => right,
                };
                successor.left = Some(left);
                Some(successor)
            }
        };
        node
    }

    /// Detaches the leftmost node below `parent`, reattaching that node's
    /// right subtree to its old parent. Returns `None` when `parent` itself
    /// is the leftmost node.
    fn detach_leftmost(mut parent: &mut Node<T>) -> Option<Box<Node<T>>> {
        if parent.left.is_none() {
            return None;
        }
        while parent
            .left
            .as_ref()
            .expect("loop descends only into parents of a left child")
            .left
            .is_some()
        {
            parent = parent
                .left
                .as_deref_mut()
                .expect("loop descends only into parents of a left child");
        }
        let mut leftmost = parent
            .left
            .take()
            .expect("loop descends only into parents of a left child");
        parent.left = leftmost.right.take();
        Some(leftmost)
    }
}

/// A lazy in-order traversal of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, T> {
    // Nodes whose value (and right subtree) are still to be visited,
    // innermost last.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

/// A lazy pre-order walk over node positions, created by [`Tree::layout`].
pub struct Layout<'a, T> {
    stack: Vec<Frame<'a, T>>,
}

struct Frame<'a, T> {
    node: &'a Node<T>,
    depth: usize,
    x: i32,
    spacing: i32,
    parent_x: Option<i32>,
}

impl<'a, T> Iterator for Layout<'a, T> {
    type Item = Placed<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let Frame {
            node,
            depth,
            x,
            spacing,
            parent_x,
        } = self.stack.pop()?;

        // Children sit half as far apart as their parent did, matching the
        // halving spread of the classic teaching visualization.
        let spacing = spacing / 2;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(Frame {
                node: right,
                depth: depth + 1,
                x: x + spacing,
                spacing,
                parent_x: Some(x),
            });
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(Frame {
                node: left,
                depth: depth + 1,
                x: x - spacing,
                spacing,
                parent_x: Some(x),
            });
        }

        Some(Placed {
            value: &node.value,
            depth,
            x,
            parent_x,
        })
    }
}

/// Where a single value sits in a drawing of the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placed<'a, T> {
    /// The value stored at this position.
    pub value: &'a T,
    /// How many edges lie between this node and the root.
    pub depth: usize,
    /// Horizontal center of this node.
    pub x: i32,
    /// Horizontal center of the parent node, which always sits one level up.
    /// `None` for the root.
    pub parent_x: Option<i32>,
}

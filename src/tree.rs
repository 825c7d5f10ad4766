//! An owned BST. Every `Node` uniquely owns its children through `Option<Box<Node>>` so
//! there are no parent pointers and no `unsafe`. The tree never rebalances.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Insertion, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! assert_eq!(tree.insert(1), Insertion::Inserted);
//! assert_eq!(tree.find(&1).map(|n| n.value()), Some(&1));
//!
//! // Inserting the same value again leaves the tree alone.
//! assert_eq!(tree.insert(1), Insertion::Duplicate);
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(tree.find(&1).is_none());
//! ```
//!
//! # Recursion depth
//!
//! The recursive operations ([`Tree::insert_recursively`], [`Tree::find_recursively`], the
//! traversals, [`Tree::remove`], [`Tree::is_balanced`] and [`Tree::height`]) use one stack
//! frame per level. Because the tree is not self-balancing, a tree built from a long sorted
//! run is a chain and can exhaust the stack. [`Tree::insert`] and [`Tree::find`] are
//! iterative and don't have this limit.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::mem;

use tracing::trace;

use crate::error::InvariantError;
use crate::util::Height;

type Link<T> = Option<Box<Node<T>>>;

/// The outcome of inserting a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// A new leaf was attached holding the value.
    Inserted,
    /// An equal value was already present so the tree is unchanged.
    Duplicate,
}

impl Insertion {
    /// Whether a new node was added.
    pub fn is_inserted(self) -> bool {
        self == Self::Inserted
    }
}

/// A Binary Search Tree holding distinct values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree around an existing root.
    ///
    /// Nothing checks that `root` respects the BST ordering. Use [`Tree::validate`] when the
    /// node was assembled by hand.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Node, Tree};
    ///
    /// let root = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// let tree = Tree::from_root(root);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.dfs_pre_order(), vec![&2, &1, &3]);
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn from_root(root: Node<T>) -> Self {
        let len = root.count();
        Self {
            root: Some(Box::new(root)),
            len,
        }
    }

    /// Builds a tree containing only `value`.
    pub fn with_value(value: T) -> Self {
        Self::from_root(Node::new(value))
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a single node a
    /// height of 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| &root.min().value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| &root.max().value)
    }

    /// Values in pre-order: a node, then its left subtree, then its right subtree.
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.pre_order(&mut visited);
        }
        visited
    }

    /// Values in in-order: left subtree, then the node, then the right subtree. For any
    /// valid tree this is ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.dfs_in_order(), vec![&1, &3, &4, &5, &8]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.in_order(&mut visited);
        }
        visited
    }

    /// Values in post-order: left subtree, then right subtree, then the node.
    pub fn dfs_post_order(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.post_order(&mut visited);
        }
        visited
    }

    /// Values level by level, left to right within each level.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert_eq!(tree.bfs(), vec![&5, &3, &8, &1, &4, &7, &9]);
    /// ```
    pub fn bfs(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.len);
        let mut queue = VecDeque::new();
        queue.extend(self.root());

        while let Some(node) = queue.pop_front() {
            visited.push(&node.value);
            queue.extend(node.left());
            queue.extend(node.right());
        }

        visited
    }

    /// Whether, for every node, the heights of its two subtrees differ by at most one.
    ///
    /// This only inspects the current shape. Nothing is ever rotated.
    pub fn is_balanced(&self) -> bool {
        measure(self.root()) != Height::Unbalanced
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `value` by walking down from the root. Equal values are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Insertion, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(2), Insertion::Inserted);
    /// assert_eq!(tree.insert(1), Insertion::Inserted);
    /// assert_eq!(tree.insert(2), Insertion::Duplicate);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> Insertion {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match value.cmp(&node.value) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    trace!(len = self.len, "duplicate insert ignored");
                    return Insertion::Duplicate;
                }
            }
        }

        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
        trace!(len = self.len, "inserted");
        Insertion::Inserted
    }

    /// Inserts `value` by recursing on the child slots. The resulting tree has exactly the
    /// shape [`Tree::insert`] would have produced.
    pub fn insert_recursively(&mut self, value: T) -> Insertion {
        let outcome = match self.root.as_mut() {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                Insertion::Inserted
            }
        };

        if outcome.is_inserted() {
            self.len += 1;
        }
        trace!(?outcome, len = self.len, "recursive insert");
        outcome
    }

    /// Potentially finds the node holding `value`, walking down from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree = Tree::with_value(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| n.value()), Some(&1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Same as [`Tree::find`] but recursing on the child slots.
    pub fn find_recursively(&self, value: &T) -> Option<&Node<T>> {
        self.root().and_then(|root| root.find(value))
    }

    /// Whether the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes `value` from the tree and returns it. If the tree doesn't hold the value,
    /// nothing happens and `None` is returned.
    ///
    /// A node with two children takes the value of its in-order successor, which is then
    /// removed from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 6, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&8), Some(8));
    /// assert_eq!(tree.remove(&8), None);
    /// assert_eq!(tree.dfs_pre_order(), vec![&5, &3, &9, &6]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let (root, removed) = remove_from(self.root.take(), value);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
        }
        trace!(found = removed.is_some(), len = self.len, "remove");
        removed
    }

    /// The second largest value in the tree. Trees with fewer than two values have none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 6, 7].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), Some(&7));
    ///
    /// assert_eq!(Tree::with_value(5).find_second_highest(), None);
    /// ```
    pub fn find_second_highest(&self) -> Option<&T> {
        let root = self.root()?;
        if root.left.is_none() && root.right.is_none() {
            return None;
        }

        let mut parent = None;
        let mut current = root;
        while let Some(right) = current.right() {
            parent = Some(current);
            current = right;
        }

        // `parent` is only `None` when the root is the maximum, and then it must have a left
        // child.
        match current.left() {
            Some(left) => Some(&left.max().value),
            None => parent.map(|parent| &parent.value),
        }
    }

    /// Checks that in-order values are strictly ascending and that [`Tree::len`] matches the
    /// number of nodes.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let in_order = self.dfs_in_order();

        if let Some(position) = in_order.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(InvariantError::OutOfOrder {
                position: position + 1,
            });
        }

        if in_order.len() != self.len {
            return Err(InvariantError::LengthMismatch {
                cached: self.len,
                counted: in_order.len(),
            });
        }

        Ok(())
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// A `Node` holds a value and up to two children, each of which it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Construct a `Node` with the given children.
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, holding smaller values.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child, holding larger values.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Number of nodes in the subtree rooted here.
    fn count(&self) -> usize {
        1 + self.left().map_or(0, Node::count) + self.right().map_or(0, Node::count)
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1.
    fn height(&self) -> usize {
        let left = self.left().map_or(0, Node::height);
        let right = self.right().map_or(0, Node::height);
        left.max(right) + 1
    }

    fn min(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    fn max(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    fn pre_order<'a>(&'a self, visited: &mut Vec<&'a T>) {
        visited.push(&self.value);
        if let Some(left) = self.left() {
            left.pre_order(visited);
        }
        if let Some(right) = self.right() {
            right.pre_order(visited);
        }
    }

    fn in_order<'a>(&'a self, visited: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.in_order(visited);
        }
        visited.push(&self.value);
        if let Some(right) = self.right() {
            right.in_order(visited);
        }
    }

    fn post_order<'a>(&'a self, visited: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.post_order(visited);
        }
        if let Some(right) = self.right() {
            right.post_order(visited);
        }
        visited.push(&self.value);
    }

    fn insert(&mut self, value: T) -> Insertion
    where
        T: Ord,
    {
        let slot = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Greater => &mut self.right,
            Ordering::Equal => return Insertion::Duplicate,
        };

        match slot {
            Some(child) => child.insert(value),
            None => {
                *slot = Some(Box::new(Node::new(value)));
                Insertion::Inserted
            }
        }
    }

    fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left().and_then(|left| left.find(value)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|right| right.find(value)),
        }
    }
}

/// Measures the subtree at `node`, giving up as soon as any part of it is unbalanced.
fn measure<T>(node: Option<&Node<T>>) -> Height {
    let Some(node) = node else {
        return Height::Balanced(0);
    };

    let left = measure(node.left());
    if left == Height::Unbalanced {
        return Height::Unbalanced;
    }
    Height::join(left, measure(node.right()))
}

/// Removes `value` from the subtree in `link`, returning the new subtree along with the value
/// if it was found.
fn remove_from<T>(link: Link<T>, value: &T) -> (Link<T>, Option<T>)
where
    T: Ord,
{
    let Some(mut node) = link else {
        return (None, None);
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = remove_from(node.left.take(), value);
            node.left = left;
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove_from(node.right.take(), value);
            node.right = right;
            (Some(node), removed)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => (None, Some(node.value)),
            (Some(child), None) | (None, Some(child)) => (Some(child), Some(node.value)),
            (Some(left), Some(right)) => {
                let (successor, right) = remove_min(right);
                let removed = mem::replace(&mut node.value, successor);
                node.left = Some(left);
                node.right = right;
                (Some(node), Some(removed))
            }
        },
    }
}

/// Removes the leftmost node of a subtree, returning its value and what remains. The leftmost
/// node has no left child so it is always spliced out directly.
fn remove_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        Some(left) => {
            let (min, left) = remove_min(left);
            node.left = left;
            (min, Some(node))
        }
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
    }
}

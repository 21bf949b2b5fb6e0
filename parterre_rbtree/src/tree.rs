// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: arena storage, rotations, fixups, lookups.

use alloc::vec::Vec;

use crate::drain::DrainSorted;
use crate::order::TreeOrder;
use crate::types::{AllocError, Color, NodeIdx};

/// One arena slot. `element` is `None` only for the sentinel and for freed
/// slots awaiting reuse; links of freed slots are never followed because
/// every reference to a removed node is rewritten before the slot is freed.
struct Node<E> {
    color: Color,
    parent: NodeIdx,
    left: NodeIdx,
    right: NodeIdx,
    element: Option<E>,
}

/// An ordered set of elements backed by a red-black tree.
///
/// Nodes live in an arena `Vec` owned by the tree; parent and child links are
/// plain indices into that arena, so there is no ownership cycle. Slot 0 is
/// the sentinel: a permanently Black, payload-less node standing in for every
/// absent child and for the root's absent parent. Keeping the sentinel a real
/// arena entry removes all presence checks from the rotation and fixup code,
/// and gives the delete fixup a writable parent field to walk up from, exactly
/// like the textbook formulation.
///
/// The tree inserts unconditionally: callers that need set semantics check
/// [`contains`](Self::contains) first (the planar-subdivision container does).
/// After every public operation the usual red-black invariants hold: the root
/// and sentinel are Black, no Red node has a Red child, every root-to-sentinel
/// path crosses the same number of Black nodes, and an in-order traversal is
/// ascending under the element adapter.
pub struct RbTree<E: TreeOrder> {
    nodes: Vec<Node<E>>,
    free_list: Vec<usize>,
    root: NodeIdx,
    len: usize,
}

impl<E: TreeOrder> Default for RbTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TreeOrder> core::fmt::Debug for RbTree<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RbTree")
            .field("len", &self.len)
            .field("slots_total", &self.nodes.len())
            .field("slots_free", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<E: TreeOrder> RbTree<E> {
    /// Create an empty tree with a fresh sentinel.
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(1);
        nodes.push(Node {
            color: Color::Black,
            parent: NodeIdx::SENTINEL,
            left: NodeIdx::SENTINEL,
            right: NodeIdx::SENTINEL,
            element: None,
        });
        Self {
            nodes,
            free_list: Vec::new(),
            root: NodeIdx::SENTINEL,
            len: 0,
        }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find the stored element equal to `probe` under the adapter.
    ///
    /// A plain binary-search descent: branches on
    /// [`less_than`](TreeOrder::less_than), matches on
    /// [`equals`](TreeOrder::equals), and never rebalances.
    pub fn search(&self, probe: &E) -> Option<&E> {
        let found = self.find(probe);
        if found.is_sentinel() {
            None
        } else {
            Some(self.element(found))
        }
    }

    /// True if an element equal to `probe` is stored.
    pub fn contains(&self, probe: &E) -> bool {
        !self.find(probe).is_sentinel()
    }

    /// Insert `element` at its ordered position, unconditionally.
    ///
    /// Arena growth is reserved before any link is touched, so on
    /// [`AllocError`] the tree is unchanged (the element is dropped with the
    /// error). Duplicate handling is the caller's concern.
    pub fn insert(&mut self, element: E) -> Result<(), AllocError> {
        let mut walk = self.root;
        let mut below = NodeIdx::SENTINEL;
        while !walk.is_sentinel() {
            below = walk;
            walk = if element.less_than(self.element(walk)) {
                self.left(walk)
            } else {
                self.right(walk)
            };
        }

        let goes_left = !below.is_sentinel() && element.less_than(self.element(below));
        let node = self.alloc_node(element, below)?;

        if below.is_sentinel() {
            self.root = node;
        } else if goes_left {
            self.node_mut(below).left = node;
        } else {
            self.node_mut(below).right = node;
        }

        self.insert_fixup(node);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the stored element equal to `probe`.
    ///
    /// Returns `None` when no such element is stored; that is normal control
    /// flow, not a fault.
    pub fn remove(&mut self, probe: &E) -> Option<E> {
        let found = self.find(probe);
        if found.is_sentinel() {
            return None;
        }
        Some(self.remove_node(found))
    }

    /// The smallest stored element, or `None` when empty.
    pub fn min(&self) -> Option<&E> {
        if self.is_empty() {
            return None;
        }
        Some(self.element(self.min_node(self.root)))
    }

    /// The largest stored element, or `None` when empty.
    pub fn max(&self) -> Option<&E> {
        if self.is_empty() {
            return None;
        }
        let mut walk = self.root;
        while !self.right(walk).is_sentinel() {
            walk = self.right(walk);
        }
        Some(self.element(walk))
    }

    /// Consume the tree, yielding its elements in ascending order.
    ///
    /// Each step removes the current minimum through the standard delete
    /// path; the tree is empty when the iterator finishes.
    pub fn drain_sorted(self) -> DrainSorted<E> {
        DrainSorted::new(self)
    }

    /// Remove and return the smallest element, if any.
    pub(crate) fn pop_min(&mut self) -> Option<E> {
        if self.is_empty() {
            return None;
        }
        let min = self.min_node(self.root);
        Some(self.remove_node(min))
    }

    // --- arena access ---

    fn node(&self, idx: NodeIdx) -> &Node<E> {
        &self.nodes[idx.get()]
    }

    fn node_mut(&mut self, idx: NodeIdx) -> &mut Node<E> {
        &mut self.nodes[idx.get()]
    }

    fn element(&self, idx: NodeIdx) -> &E {
        self.node(idx)
            .element
            .as_ref()
            .expect("no element at sentinel or freed slot")
    }

    fn color(&self, idx: NodeIdx) -> Color {
        self.node(idx).color
    }

    fn parent(&self, idx: NodeIdx) -> NodeIdx {
        self.node(idx).parent
    }

    fn left(&self, idx: NodeIdx) -> NodeIdx {
        self.node(idx).left
    }

    fn right(&self, idx: NodeIdx) -> NodeIdx {
        self.node(idx).right
    }

    /// Allocate a Red leaf holding `element`, reusing a freed slot if one is
    /// available and growing the arena fallibly otherwise.
    fn alloc_node(&mut self, element: E, parent: NodeIdx) -> Result<NodeIdx, AllocError> {
        let node = Node {
            color: Color::Red,
            parent,
            left: NodeIdx::SENTINEL,
            right: NodeIdx::SENTINEL,
            element: Some(element),
        };
        if let Some(slot) = self.free_list.pop() {
            self.nodes[slot] = node;
            Ok(NodeIdx::new(slot))
        } else {
            self.nodes.try_reserve(1)?;
            self.nodes.push(node);
            Ok(NodeIdx::new(self.nodes.len() - 1))
        }
    }

    /// Take the payload out of a fully unlinked node and recycle its slot.
    fn free_node(&mut self, idx: NodeIdx) -> E {
        let node = self.node_mut(idx);
        let element = node.element.take().expect("freed slot still linked");
        node.parent = NodeIdx::SENTINEL;
        node.left = NodeIdx::SENTINEL;
        node.right = NodeIdx::SENTINEL;
        node.color = Color::Red;
        self.free_list.push(idx.get());
        element
    }

    // --- search ---

    fn find(&self, probe: &E) -> NodeIdx {
        let mut walk = self.root;
        while !walk.is_sentinel() {
            let stored = self.element(walk);
            if stored.equals(probe) {
                break;
            }
            walk = if stored.less_than(probe) {
                self.right(walk)
            } else {
                self.left(walk)
            };
        }
        walk
    }

    /// Leftmost node of the subtree at `from`. `from` must not be the sentinel.
    fn min_node(&self, from: NodeIdx) -> NodeIdx {
        let mut walk = from;
        while !self.left(walk).is_sentinel() {
            walk = self.left(walk);
        }
        walk
    }

    // --- rotations ---

    /// Rotate the subtree at `node` left: its right child takes its place.
    ///
    /// ```text
    ///     node                 r
    ///     /  \                / \
    ///    *    r      -->   node  *
    ///        / \           /  \
    ///       c   *         *    c
    /// ```
    fn rotate_left(&mut self, node: NodeIdx) {
        let r = self.right(node);
        let r_left = self.left(r);

        self.node_mut(node).right = r_left;
        if !r_left.is_sentinel() {
            self.node_mut(r_left).parent = node;
        }

        let up = self.parent(node);
        self.node_mut(r).parent = up;
        if up.is_sentinel() {
            self.root = r;
        } else if self.left(up) == node {
            self.node_mut(up).left = r;
        } else {
            self.node_mut(up).right = r;
        }

        self.node_mut(r).left = node;
        self.node_mut(node).parent = r;
    }

    /// Rotate the subtree at `node` right: its left child takes its place.
    fn rotate_right(&mut self, node: NodeIdx) {
        let l = self.left(node);
        let l_right = self.right(l);

        self.node_mut(node).left = l_right;
        if !l_right.is_sentinel() {
            self.node_mut(l_right).parent = node;
        }

        let up = self.parent(node);
        self.node_mut(l).parent = up;
        if up.is_sentinel() {
            self.root = l;
        } else if self.left(up) == node {
            self.node_mut(up).left = l;
        } else {
            self.node_mut(up).right = l;
        }

        self.node_mut(l).right = node;
        self.node_mut(node).parent = l;
    }

    // --- rebalancing ---

    /// Restore the no-Red-Red invariant after attaching a Red leaf.
    ///
    /// Walks upward while the parent is Red, keyed on which side the parent
    /// sits and on the uncle's color: a Red uncle recolors and continues from
    /// the grandparent; a Black uncle converts the inner case to the outer one
    /// by rotation, then recolors and rotates the grandparent.
    fn insert_fixup(&mut self, node: NodeIdx) {
        let mut walk = node;
        while self.color(self.parent(walk)) == Color::Red {
            let parent = self.parent(walk);
            let grand = self.parent(parent);
            if parent == self.left(grand) {
                let uncle = self.right(grand);
                if self.color(uncle) == Color::Red {
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(uncle).color = Color::Black;
                    self.node_mut(grand).color = Color::Red;
                    walk = grand;
                } else {
                    if walk == self.right(parent) {
                        walk = parent;
                        self.rotate_left(walk);
                    }
                    let parent = self.parent(walk);
                    let grand = self.parent(parent);
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(grand).color = Color::Red;
                    self.rotate_right(grand);
                }
            } else {
                let uncle = self.left(grand);
                if self.color(uncle) == Color::Red {
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(uncle).color = Color::Black;
                    self.node_mut(grand).color = Color::Red;
                    walk = grand;
                } else {
                    if walk == self.left(parent) {
                        walk = parent;
                        self.rotate_right(walk);
                    }
                    let parent = self.parent(walk);
                    let grand = self.parent(parent);
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(grand).color = Color::Red;
                    self.rotate_left(grand);
                }
            }
        }
        let root = self.root;
        self.node_mut(root).color = Color::Black;
    }

    /// Replace the subtree at `a` with the subtree at `b` in `a`'s parent.
    ///
    /// Rewrites `b`'s parent link even when `b` is the sentinel; the delete
    /// fixup relies on that scratch parent to walk upward.
    fn transplant(&mut self, a: NodeIdx, b: NodeIdx) {
        let up = self.parent(a);
        if up.is_sentinel() {
            self.root = b;
        } else if self.left(up) == a {
            self.node_mut(up).left = b;
        } else {
            self.node_mut(up).right = b;
        }
        self.node_mut(b).parent = up;
    }

    /// Unlink `target` and return its payload.
    ///
    /// The classic three-case splice: a missing child lets the other child
    /// move up; with two children the in-order successor (minimum of the right
    /// subtree) is relinked into `target`'s place, taking over its color. When
    /// the physically spliced node was Black the fixup runs from the node now
    /// filling its slot, which may be the sentinel.
    fn remove_node(&mut self, target: NodeIdx) -> E {
        let mut spliced = target;
        let mut spliced_color = self.color(spliced);
        let fill;

        if self.left(target).is_sentinel() {
            fill = self.right(target);
            self.transplant(target, fill);
        } else if self.right(target).is_sentinel() {
            fill = self.left(target);
            self.transplant(target, fill);
        } else {
            spliced = self.min_node(self.right(target));
            spliced_color = self.color(spliced);
            fill = self.right(spliced);

            if self.parent(spliced) == target {
                self.node_mut(fill).parent = spliced;
            } else {
                self.transplant(spliced, fill);
                let right = self.right(target);
                self.node_mut(spliced).right = right;
                self.node_mut(right).parent = spliced;
            }

            self.transplant(target, spliced);
            let left = self.left(target);
            self.node_mut(spliced).left = left;
            self.node_mut(left).parent = spliced;
            let color = self.color(target);
            self.node_mut(spliced).color = color;
        }

        if spliced_color == Color::Black {
            self.delete_fixup(fill);
        }
        self.len -= 1;
        self.free_node(target)
    }

    /// Restore the black-height invariant after splicing out a Black node.
    ///
    /// Mirrored left/right cases keyed on the sibling and the sibling's
    /// children: a Red sibling is rotated into a Black one; a sibling with two
    /// Black children pushes the deficit to the parent; otherwise the far
    /// child is forced Red (by converting the near case) and one final
    /// rotation absorbs the extra Black.
    fn delete_fixup(&mut self, node: NodeIdx) {
        let mut walk = node;
        while walk != self.root && self.color(walk) == Color::Black {
            let parent = self.parent(walk);
            if walk == self.left(parent) {
                let mut sibling = self.right(parent);

                if self.color(sibling) == Color::Red {
                    self.node_mut(sibling).color = Color::Black;
                    self.node_mut(parent).color = Color::Red;
                    self.rotate_left(parent);
                    sibling = self.right(parent);
                }

                if self.color(self.left(sibling)) == Color::Black
                    && self.color(self.right(sibling)) == Color::Black
                {
                    self.node_mut(sibling).color = Color::Red;
                    walk = parent;
                } else {
                    if self.color(self.right(sibling)) == Color::Black {
                        let near = self.left(sibling);
                        self.node_mut(near).color = Color::Black;
                        self.node_mut(sibling).color = Color::Red;
                        self.rotate_right(sibling);
                        sibling = self.right(parent);
                    }

                    let color = self.color(parent);
                    self.node_mut(sibling).color = color;
                    self.node_mut(parent).color = Color::Black;
                    let far = self.right(sibling);
                    self.node_mut(far).color = Color::Black;
                    self.rotate_left(parent);
                    walk = self.root;
                }
            } else {
                let mut sibling = self.left(parent);

                if self.color(sibling) == Color::Red {
                    self.node_mut(sibling).color = Color::Black;
                    self.node_mut(parent).color = Color::Red;
                    self.rotate_right(parent);
                    sibling = self.left(parent);
                }

                if self.color(self.right(sibling)) == Color::Black
                    && self.color(self.left(sibling)) == Color::Black
                {
                    self.node_mut(sibling).color = Color::Red;
                    walk = parent;
                } else {
                    if self.color(self.left(sibling)) == Color::Black {
                        let near = self.right(sibling);
                        self.node_mut(near).color = Color::Black;
                        self.node_mut(sibling).color = Color::Red;
                        self.rotate_left(sibling);
                        sibling = self.left(parent);
                    }

                    let color = self.color(parent);
                    self.node_mut(sibling).color = color;
                    self.node_mut(parent).color = Color::Black;
                    let far = self.left(sibling);
                    self.node_mut(far).color = Color::Black;
                    self.rotate_right(parent);
                    walk = self.root;
                }
            }
        }
        self.node_mut(walk).color = Color::Black;
    }
}

// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordering adapter trait consulted by the tree for every comparison.

/// Ordering and equality adapter for elements stored in an [`RbTree`].
///
/// The tree never inspects elements directly: descent branches on
/// [`less_than`](Self::less_than) and membership checks use
/// [`equals`](Self::equals). Binding a payload type to the tree through this
/// trait resolves the comparison dispatch at construction time; there is no
/// per-comparison tag switch.
///
/// # Consistency
///
/// `less_than` must be a strict total order over the stored elements and
/// `equals` must agree with it: two elements that compare equal must not
/// compare less-than each other in either direction. The tree assumes this
/// and performs no run-time verification. An inconsistent adapter produces an
/// unspecified tree shape (lookups may miss, drains may misorder), never
/// memory unsafety.
///
/// [`RbTree`]: crate::RbTree
pub trait TreeOrder {
    /// Strict total order used to pick a branch during descent.
    fn less_than(&self, other: &Self) -> bool;

    /// Equality used to detect membership.
    ///
    /// The default derives equality from the order: neither element is less
    /// than the other. Override when the payload has a cheaper or stricter
    /// notion of being the same element.
    fn equals(&self, other: &Self) -> bool {
        !self.less_than(other) && !other.less_than(self)
    }
}

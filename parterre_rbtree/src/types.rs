// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node bookkeeping types and the allocation error.

use alloc::collections::TryReserveError;
use core::fmt;

/// Node color. The sentinel is permanently [`Black`](Color::Black).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Index of a node inside a tree's arena.
///
/// Slot 0 of every arena is the sentinel, the uniform stand-in for "no
/// child" and "no parent at root". Indices are internal; they are never
/// handed out across the public API.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const SENTINEL: Self = Self(0);

    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }

    pub(crate) const fn is_sentinel(self) -> bool {
        self.0 == 0
    }
}

/// Returned when the node arena cannot grow to hold another element.
///
/// Insertion reserves arena space before touching any links, so a failed
/// reservation leaves the tree unchanged; the element that could not be
/// stored is dropped with the error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocError(pub(crate) TryReserveError);

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tree arena allocation failed: {}", self.0)
    }
}

impl core::error::Error for AllocError {}

impl From<TryReserveError> for AllocError {
    fn from(err: TryReserveError) -> Self {
        Self(err)
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Zero-based character position for terminal UI - see [`Index`] type.

use super::{Length, len};
use crate::{ChUnit, RowIndex, generate_index_type_impl};
use std::hash::Hash;

/// Represents an index position in character units.
///
/// An `Index` is a 0-based measurement that represents a position within a component
/// in the terminal UI, such as a row or column position. It wraps a [`ChUnit`] value.
///
/// `Index` values can be created using the [`Index::new`] method, the [idx] function,
/// or by converting from various numeric types.
///
/// The relationship between [`Index`] and [`Length`] is that:
/// - A `Length` is 1-based (starts from 1)
/// - An `Index` is 0-based (starts from 0)
/// - The last valid index in a component with length L is L-1
///
/// # Examples
///
/// ```
/// use r3bl_tui::{Index, idx, ch};
///
/// // Create an Index using the new method
/// let index1 = Index::new(5);
///
/// // Create an Index using the idx function
/// let index2 = idx(5);
///
/// // Convert from a ChUnit
/// let index3 = Index::from(ch(5));
///
/// assert_eq!(index1, index2);
/// assert_eq!(index2, index3);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Index(pub ChUnit);
generate_index_type_impl!(
    /* Add impl for this type */ Index, /* Use this associated type */ Length,
    /* Make this constructor fn */ idx, /* Use this constructor fn */ len
);

impl From<RowIndex> for Index {
    fn from(row: RowIndex) -> Self { Index(row.0) }
}

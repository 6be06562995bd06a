// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `GCStringOwned` implementation and related functionality.

pub mod gc_string_owned;
pub mod gc_string_owned_editor_impl;
pub mod gc_string_owned_non_editor_impl;

pub use gc_string_owned::*;
pub use gc_string_owned_editor_impl::*;
pub use gc_string_owned_non_editor_impl::*;

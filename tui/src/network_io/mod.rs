// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod bincode_serde;
pub mod compress;
pub mod length_prefix_protocol;
pub mod protocol_types;

// Re-export.
pub use bincode_serde::*;
pub use compress::*;
pub use length_prefix_protocol::*;
pub use protocol_types::*;

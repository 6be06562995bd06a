// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test modules for ANSI parser implementation.

pub mod tests_parse_common;
pub mod tests_parse_general;
pub mod tests_parse_csi_absolute_positioning;
pub mod tests_parse_cursor_movement;
pub mod tests_parse_sgr_styling;
pub mod tests_parse_esc_sequences;
pub mod tests_parse_full_ansi_sequences;
pub mod tests_parse_osc;
pub mod tests_parse_auto_wrap_mode_print;

/*
 *   Copyright (c) 2022 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

// Attach sources.
pub mod common_enums;
pub mod common_math;
pub mod common_result_and_error;
pub mod common_type_aliases;
pub mod constants;
pub mod miette_setup_global_report_handler;
pub mod ordered_map;
pub mod rate_limiter;
pub mod ring_buffer;
pub mod text_default_styles;
pub mod time_duration;
pub mod telemetry;

// Re-export.
pub use common_enums::*;
pub use common_math::*;
pub use common_result_and_error::*;
pub use common_type_aliases::*;
pub use constants::*;
pub use miette_setup_global_report_handler::*;
pub use ordered_map::*;
pub use rate_limiter::*;
pub use ring_buffer::*;
pub use text_default_styles::*;
pub use time_duration::*;
pub use telemetry::*;
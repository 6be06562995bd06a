/*
 *   Copyright (c) 2025 R3BL LLC
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

// Attach files.
pub mod analytics_action;
pub mod config_folder;
pub mod http_client;
pub mod proxy_machine_id;
pub mod report_analytics;
pub mod ui_str;
pub mod upgrade_check;

// Re-export.
pub use analytics_action::*;
pub use config_folder::*;
pub use http_client::*;
pub use proxy_machine_id::*;
pub use report_analytics::*;
pub use ui_str::*;
pub use upgrade_check::*;

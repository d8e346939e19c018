// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

use crate::device::common::CommandOptions;

/// Application configuration constants
pub struct AppConfig;

impl AppConfig {
    /// Log filter used when RUST_LOG is not set.
    pub const DEFAULT_LOG_FILTER: &'static str = "gpu_inventory=warn";
    /// Log filter used with --verbose when RUST_LOG is not set.
    pub const VERBOSE_LOG_FILTER: &'static str = "gpu_inventory=debug";
}

/// Configuration for GPU discovery.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Per-tool timeout. Default: none, a hung tool blocks discovery.
    pub timeout: Option<Duration>,
}

impl DiscoveryConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up on a tool that has not exited after `timeout`.
    ///
    /// A timed-out tool is treated as broken, not as absent.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn command_options(&self) -> CommandOptions {
        CommandOptions {
            timeout: self.timeout,
        }
    }
}

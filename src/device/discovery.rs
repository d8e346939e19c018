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

//! GPU discovery across vendor tools.
//!
//! Tools are probed in registry order and the first one that is installed
//! wins. A missing tool is skipped; a tool that is installed but fails, or
//! whose output cannot be parsed, stops discovery with an error. No partial
//! results are returned.

use tracing::{debug, error, info};

use crate::common::config::DiscoveryConfig;
use crate::device::common::{CommandExecutor, SystemExecutor};
use crate::device::registry::{tool_names, ToolDescriptor, SMI_TOOLS};
use crate::error::{Error, Result};

/// Get one summary line per GPU on this host.
///
/// # Errors
///
/// Returns [`Error::AllToolsAbsent`] if no vendor tool is installed, or
/// the wrapped cause if the first installed tool fails.
pub fn gpu_info() -> Result<Vec<String>> {
    gpu_info_with(&SystemExecutor::default())
}

/// Same as [`gpu_info`], with execution options taken from `config`.
pub fn gpu_info_with_config(config: &DiscoveryConfig) -> Result<Vec<String>> {
    gpu_info_with(&SystemExecutor::new(config.command_options()))
}

/// Same as [`gpu_info`], running tools through `executor`.
pub fn gpu_info_with<E: CommandExecutor + ?Sized>(executor: &E) -> Result<Vec<String>> {
    gpu_info_from(&SMI_TOOLS, executor)
}

/// Probe `tools` in order through `executor`.
pub fn gpu_info_from<E: CommandExecutor + ?Sized>(
    tools: &[ToolDescriptor],
    executor: &E,
) -> Result<Vec<String>> {
    for tool in tools {
        let output = match executor.execute(tool.program(), &tool.args()) {
            Ok(output) => output,
            Err(e) if e.is_not_found() => {
                debug!(tool = tool.name, "tool not installed, trying next");
                continue;
            }
            Err(source) => {
                error!(tool = tool.name, "failed to run tool: {source}");
                return Err(Error::Execution {
                    tool: tool.name.to_string(),
                    source,
                });
            }
        };

        let devices = (tool.parse)(output.trim()).map_err(|source| {
            error!(tool = tool.name, "failed to parse tool output: {source}");
            Error::Parse {
                tool: tool.name.to_string(),
                source,
            }
        })?;

        info!(tool = tool.name, devices = devices.len(), "GPU discovery complete");
        return Ok(devices);
    }

    Err(Error::AllToolsAbsent {
        tools: tool_names(tools),
    })
}

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

use std::fmt;

use crate::device::parsers::{parse_nvidia_smi, parse_rocm_smi, parse_xpu_smi};
use crate::error::ParseError;

/// Turns the full stdout of a tool into one summary line per device.
pub type ParseFn = fn(&str) -> Result<Vec<String>, ParseError>;

/// A vendor tool: its name, how to invoke it, and how to read its output.
#[derive(Clone, Copy)]
pub struct ToolDescriptor {
    pub name: &'static str,
    /// Program followed by its arguments, separated by spaces.
    pub command: &'static str,
    pub parse: ParseFn,
}

impl ToolDescriptor {
    pub const fn new(name: &'static str, command: &'static str, parse: ParseFn) -> Self {
        Self {
            name,
            command,
            parse,
        }
    }

    pub fn program(&self) -> &'static str {
        self.command.split_whitespace().next().unwrap_or(self.name)
    }

    pub fn args(&self) -> Vec<&'static str> {
        self.command.split_whitespace().skip(1).collect()
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("command", &self.command)
            .finish_non_exhaustive()
    }
}

/// Vendor tools in probe order. The commands must match the real tools.
pub const SMI_TOOLS: [ToolDescriptor; 3] = [
    ToolDescriptor::new("nvidia-smi", "nvidia-smi --list-gpus", parse_nvidia_smi),
    ToolDescriptor::new("rocm-smi", "rocm-smi -i", parse_rocm_smi),
    ToolDescriptor::new("xpu-smi", "xpu-smi discovery", parse_xpu_smi),
];

/// Names of the given tools, in order.
pub fn tool_names(tools: &[ToolDescriptor]) -> Vec<String> {
    tools.iter().map(|tool| tool.name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_commands() {
        let commands: Vec<_> = SMI_TOOLS.iter().map(|t| (t.name, t.command)).collect();
        assert_eq!(
            commands,
            vec![
                ("nvidia-smi", "nvidia-smi --list-gpus"),
                ("rocm-smi", "rocm-smi -i"),
                ("xpu-smi", "xpu-smi discovery"),
            ]
        );
    }

    #[test]
    fn test_program_and_args() {
        assert_eq!(SMI_TOOLS[0].program(), "nvidia-smi");
        assert_eq!(SMI_TOOLS[0].args(), vec!["--list-gpus"]);
        assert_eq!(SMI_TOOLS[1].args(), vec!["-i"]);
        assert_eq!(SMI_TOOLS[2].args(), vec!["discovery"]);
    }

    #[test]
    fn test_tool_names() {
        assert_eq!(
            tool_names(&SMI_TOOLS),
            vec!["nvidia-smi", "rocm-smi", "xpu-smi"]
        );
    }

    #[test]
    fn test_descriptor_dispatches_to_parser() {
        let lines = (SMI_TOOLS[0].parse)("GPU 0: Tesla T4 (UUID: GPU-x)").unwrap();
        assert_eq!(lines, vec!["GPU 0: Tesla T4 (UUID: GPU-x)"]);
    }
}

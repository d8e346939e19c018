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

// Command execution for vendor SMI tools.
//
// The executor is the only place that touches the operating system. It must
// keep "program not found" apart from every other failure, since discovery
// falls through to the next tool on the former and stops on the latter.

use crate::device::common::{DeviceError, DeviceResult};
use crate::utils::command_timeout::{run_command, run_command_with_timeout};
use std::io;
use std::process::Output;
use std::time::Duration;

/// Runs a program and hands back its standard output as text.
pub trait CommandExecutor {
    fn execute(&self, program: &str, args: &[&str]) -> DeviceResult<String>;
}

/// Options to control command execution behavior.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Optional timeout. If None, the command may block indefinitely.
    pub timeout: Option<Duration>,
}

/// [`CommandExecutor`] backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor {
    options: CommandOptions,
}

impl SystemExecutor {
    pub fn new(options: CommandOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CommandOptions {
        &self.options
    }
}

impl CommandExecutor for SystemExecutor {
    fn execute(&self, program: &str, args: &[&str]) -> DeviceResult<String> {
        execute_command(program, args, &self.options)
    }
}

/// Execute a command with the provided CommandOptions.
///
/// - Spawn failure with `ErrorKind::NotFound` becomes `DeviceError::NotFound`
/// - A non-zero exit status becomes `DeviceError::CommandFailed`
/// - Stdout that is not valid UTF-8 becomes `DeviceError::Decode`
pub fn execute_command(
    program: &str,
    args: &[&str],
    options: &CommandOptions,
) -> DeviceResult<String> {
    let command = display_command(program, args);

    let result = match options.timeout {
        Some(timeout) => run_command_with_timeout(program, args, timeout),
        None => run_command(program, args),
    };

    let output = result.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DeviceError::NotFound {
            program: program.to_string(),
        },
        io::ErrorKind::TimedOut => DeviceError::Timeout {
            command: command.clone(),
            timeout: options.timeout.unwrap_or_default(),
        },
        _ => DeviceError::Io(e),
    })?;

    decode_output(&command, output)
}

fn decode_output(command: &str, output: Output) -> DeviceResult<String> {
    if !output.status.success() {
        return Err(DeviceError::CommandFailed {
            command: command.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|source| DeviceError::Decode {
        command: command.to_string(),
        source,
    })
}

fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_execute_command_default_success() {
        let out = SystemExecutor::default()
            .execute("echo", &["hello"])
            .expect("echo should succeed");
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn test_execute_command_with_status_check() {
        // `false` returns non-zero status on Unix
        let err = execute_command("false", &[], &CommandOptions::default()).unwrap_err();
        match err {
            DeviceError::CommandFailed { command, code, .. } => {
                assert_eq!(command, "false");
                assert_eq!(code, Some(1));
            }
            other => panic!("Expected CommandFailed error, got: {other}"),
        }
    }

    #[test]
    fn test_execute_command_not_found() {
        let err = SystemExecutor::default()
            .execute("no-such-smi-binary", &["--list-gpus"])
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_execute_command_timeout() {
        let executor = SystemExecutor::new(CommandOptions {
            timeout: Some(Duration::from_millis(100)),
        });
        let err = executor.execute("sleep", &["5"]).unwrap_err();
        assert!(matches!(err, DeviceError::Timeout { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_display_command() {
        assert_eq!(display_command("rocm-smi", &["-i"]), "rocm-smi -i");
        assert_eq!(display_command("false", &[]), "false");
    }
}

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

use std::io;
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Execute a command and block until it exits.
pub fn run_command(command: &str, args: &[&str]) -> io::Result<Output> {
    Command::new(command).args(args).output()
}

/// Execute a command with a timeout.
/// Returns Ok(Output) if the command completes within the timeout,
/// Err with `ErrorKind::TimedOut` if it does not, or the spawn error
/// if the command fails to start.
pub fn run_command_with_timeout(
    command: &str,
    args: &[&str],
    timeout: Duration,
) -> io::Result<Output> {
    let (tx, rx) = mpsc::channel();

    let command = command.to_string();
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();

    // The child is left running if the timeout fires first.
    thread::spawn(move || {
        let output = Command::new(command).args(args).output();
        let _ = tx.send(output);
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(_) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("Command timed out after {timeout:?}"),
        )),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_echo() {
        let out = run_command("echo", &["hello"]).expect("echo should succeed");
        assert!(out.status.success());
        assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "hello");
    }

    #[test]
    fn test_run_command_with_timeout_expires() {
        let err = run_command_with_timeout("sleep", &["5"], Duration::from_millis(100))
            .expect_err("sleep should time out");
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    }

    #[test]
    fn test_run_command_missing_program() {
        let err = run_command_with_timeout(
            "definitely-not-a-real-smi-tool",
            &[],
            Duration::from_secs(2),
        )
        .expect_err("missing program should fail to spawn");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

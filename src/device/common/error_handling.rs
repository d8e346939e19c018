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

// Error types and result alias for running vendor tools.

use std::io;
use std::string::FromUtf8Error;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    /// The program is not installed or not on the search path.
    #[error("Program not found: '{program}'")]
    NotFound { program: String },

    #[error("Command failed: '{command}' (code: {code:?}) stderr: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Output of '{command}' is not valid UTF-8")]
    Decode {
        command: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Timeout: '{command}' did not finish within {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type DeviceResult<T> = Result<T, DeviceError>;

impl DeviceError {
    /// True when the tool is simply absent from this host.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DeviceError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        let err = DeviceError::NotFound {
            program: "rocm-smi".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Program not found: 'rocm-smi'");

        let err: DeviceError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_command_failed_display() {
        let err = DeviceError::CommandFailed {
            command: "nvidia-smi --list-gpus".to_string(),
            code: Some(9),
            stderr: "NVIDIA-SMI has failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Command failed: 'nvidia-smi --list-gpus' (code: Some(9)) stderr: NVIDIA-SMI has failed"
        );
    }
}

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

//! Error types for the gpu-inventory library.
//!
//! There are three layers:
//!
//! - [`ParseError`]: raised by a vendor parser when tool output does not
//!   match the grammar it expects.
//! - [`DeviceError`]: raised by the command executor. Only
//!   [`DeviceError::NotFound`] is recoverable; discovery moves on to the
//!   next tool when it sees it.
//! - [`enum@Error`]: what [`crate::gpu_info`] returns. Every fatal failure is
//!   wrapped together with the name of the tool that caused it.
//!
//! # Example
//!
//! ```rust,no_run
//! use gpu_inventory::{gpu_info, Result};
//!
//! fn main() -> Result<()> {
//!     for line in gpu_info()? {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

pub use crate::device::common::error_handling::DeviceError;

/// Error produced while decoding the text output of a vendor tool.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The output does not have the shape the parser expects.
    ///
    /// `line` is 1-based and refers to the line of the tool output that
    /// triggered the failure (0 when the output ended before the expected
    /// content appeared).
    #[error("unexpected output at line {line}: {reason}")]
    Structure { line: usize, reason: String },

    /// A device block was found but one of its required fields was not.
    #[error("device '{device}' is missing field '{field}'")]
    MissingField { device: String, field: &'static str },
}

impl ParseError {
    pub(crate) fn structure(line: usize, reason: impl Into<String>) -> Self {
        ParseError::Structure {
            line,
            reason: reason.into(),
        }
    }
}

/// The main error type returned by GPU discovery.
#[derive(Debug, Error)]
pub enum Error {
    /// None of the registered vendor tools is installed on this host.
    #[error("GPU interface not found ({})", .tools.join(", "))]
    AllToolsAbsent { tools: Vec<String> },

    /// A vendor tool is installed but running it failed.
    #[error("Failed to retrieve GPU information from {tool}: {source}")]
    Execution {
        tool: String,
        #[source]
        source: DeviceError,
    },

    /// A vendor tool ran but its output could not be parsed.
    #[error("Failed to retrieve GPU information from {tool}: {source}")]
    Parse {
        tool: String,
        #[source]
        source: ParseError,
    },
}

impl Error {
    /// Name of the tool that caused the failure, if a single tool did.
    pub fn tool(&self) -> Option<&str> {
        match self {
            Error::AllToolsAbsent { .. } => None,
            Error::Execution { tool, .. } | Error::Parse { tool, .. } => Some(tool),
        }
    }
}

/// A specialized Result type for discovery operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::AllToolsAbsent {
            tools: vec![
                "nvidia-smi".to_string(),
                "rocm-smi".to_string(),
                "xpu-smi".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "GPU interface not found (nvidia-smi, rocm-smi, xpu-smi)"
        );

        let err = Error::Parse {
            tool: "rocm-smi".to_string(),
            source: ParseError::MissingField {
                device: "GPU 1".to_string(),
                field: "GUID",
            },
        };
        assert_eq!(
            err.to_string(),
            "Failed to retrieve GPU information from rocm-smi: device 'GPU 1' is missing field 'GUID'"
        );
        assert_eq!(err.tool(), Some("rocm-smi"));
    }

    #[test]
    fn test_structure_error_display() {
        let err = ParseError::structure(4, "expected 3 fields, found 4");
        assert_eq!(
            err.to_string(),
            "unexpected output at line 4: expected 3 fields, found 4"
        );
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err = Error::Execution {
            tool: "xpu-smi".to_string(),
            source: DeviceError::CommandFailed {
                command: "xpu-smi discovery".to_string(),
                code: Some(1),
                stderr: "no devices".to_string(),
            },
        };
        assert!(err.source().is_some());
        assert_eq!(err.tool(), Some("xpu-smi"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
        assert_send_sync::<ParseError>();
    }
}

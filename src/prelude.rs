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

//! The gpu-inventory prelude.
//!
//! ```rust
//! use gpu_inventory::prelude::*;
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gpu_inventory::prelude::*;
//!
//! fn main() -> Result<()> {
//!     for line in gpu_info()? {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

// Entry points
pub use crate::device::{gpu_info, gpu_info_from, gpu_info_with, gpu_info_with_config};

// Configuration
pub use crate::common::config::DiscoveryConfig;

// Error types
pub use crate::device::common::{DeviceError, DeviceResult};
pub use crate::error::{Error, ParseError, Result};

// Execution and registry, for custom executors and tool lists
pub use crate::device::common::{CommandExecutor, CommandOptions, SystemExecutor};
pub use crate::device::parsers::{parse_nvidia_smi, parse_rocm_smi, parse_xpu_smi};
pub use crate::device::registry::{ParseFn, ToolDescriptor, SMI_TOOLS};

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

//! Discover which GPUs a host has by asking the installed vendor tool.
//!
//! `nvidia-smi`, `rocm-smi` and `xpu-smi` are probed in that order; the
//! first one found is run and its output is turned into one line per GPU:
//!
//! ```text
//! GPU 0: AMD Instinct MI210 0x740f (GUID: 13566)
//! ```

pub mod device;
pub mod error;
pub mod parsing;
pub mod prelude;

mod utils;

pub mod common {
    pub mod config;
}

pub use device::{gpu_info, gpu_info_from, gpu_info_with, gpu_info_with_config};
pub use error::{Error, ParseError, Result};

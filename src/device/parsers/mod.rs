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

//! Parsers for the text output of vendor SMI tools.
//!
//! Each parser turns the full output of one tool invocation into one
//! summary line per GPU, in the order the devices appear in the output.
//! Parsers are pure functions of their input.

pub mod nvidia;
pub mod rocm;
pub mod xpu;

pub use nvidia::parse_nvidia_smi;
pub use rocm::parse_rocm_smi;
pub use xpu::parse_xpu_smi;

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

use crate::error::ParseError;
use crate::parsing::common::split_lines;

/// Parse `nvidia-smi --list-gpus` output.
///
/// nvidia-smi already prints one summary per device, e.g.
/// `GPU 0: NVIDIA H100 80GB HBM3 (UUID: GPU-deb02430-...)`,
/// so lines are passed through unchanged.
pub fn parse_nvidia_smi(output: &str) -> Result<Vec<String>, ParseError> {
    Ok(split_lines(output).into_iter().map(str::to_string).collect())
}

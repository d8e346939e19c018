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
use crate::parsing::common::{split_lines, strip_brackets};
use crate::parsing::DeviceTable;

const DEVICE_NAME: &str = "Device Name";
const DEVICE_ID: &str = "Device ID";
const GUID: &str = "GUID";

/// Parse `rocm-smi -i` output.
///
/// Expected format (banners and footers are skipped):
/// ```text
/// GPU[0]          : Device Name:          Instinct MI210
/// GPU[0]          : Device ID:            0x740f
/// GPU[0]          : GUID:                 13566
/// ```
/// Produces `GPU 0: AMD Instinct MI210 0x740f (GUID: 13566)` per device.
///
/// Values must not contain a colon; such a line is rejected rather than
/// guessed at.
pub fn parse_rocm_smi(output: &str) -> Result<Vec<String>, ParseError> {
    let mut table: DeviceTable<String> = DeviceTable::new();

    for (index, line) in split_lines(output).into_iter().enumerate() {
        if !line.starts_with("GPU") {
            continue;
        }

        let parts: Vec<&str> = line.split(':').collect();
        let [tag, key, value] = parts.as_slice() else {
            return Err(ParseError::structure(
                index + 1,
                format!(
                    "expected 'GPU[<index>] : <field>: <value>', found {} ':'-separated parts",
                    parts.len()
                ),
            ));
        };

        table.insert(strip_brackets(tag), key.trim(), value.trim());
    }

    tracing::trace!(devices = table.len(), "parsed rocm-smi output");

    table
        .keys()
        .map(|device| -> Result<String, ParseError> {
            Ok(format!(
                "{device}: AMD {} {} (GUID: {})",
                table.require(device, DEVICE_NAME)?,
                table.require(device, DEVICE_ID)?,
                table.require(device, GUID)?,
            ))
        })
        .collect()
}

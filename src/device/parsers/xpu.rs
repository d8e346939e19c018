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
use crate::parsing::common::{is_table_border, split_lines};
use crate::parsing::DeviceTable;

/// The header row counts as section 0; it is never a device on its own.
const HEADER_SECTION: usize = 0;

// Whitespace token positions in a row such as
// `| 0 | Device Name: Intel(R) Data Center GPU Max 1550 |`.
// Position 5 is the vendor prefix ("Intel(R)"), which is dropped.
const INDEX_TOKEN: usize = 1;
const NAME_FIRST_TOKEN: usize = 6;
// `| | SOC UUID: 00000000-0000-0000-51ac-359875c9cdb7 |`
const UUID_TOKEN: usize = 4;

const NAME: &str = "name";
const UUID: &str = "uuid";

/// Parse `xpu-smi discovery` output.
///
/// Expected format:
/// ```text
/// +-----------+--------------------------------------------------+
/// | Device ID | Device Information                               |
/// +-----------+--------------------------------------------------+
/// | 0         | Device Name: Intel(R) Data Center GPU Max 1550   |
/// |           | Vendor Name: Intel(R) Corporation                |
/// |           | SOC UUID: 00000000-0000-0000-51ac-359875c9cdb7   |
/// +-----------+--------------------------------------------------+
/// ```
/// Produces `GPU 0: Data Center GPU Max 1550 (UUID: 00000000-...)` per device.
///
/// The first non-border row must be the table header, otherwise the output
/// is rejected. Empty output is rejected for the same reason.
pub fn parse_xpu_smi(output: &str) -> Result<Vec<String>, ParseError> {
    let mut section: Option<usize> = None;
    let mut table: DeviceTable<usize> = DeviceTable::new();

    for (index, line) in split_lines(output).into_iter().enumerate() {
        let line_number = index + 1;

        if is_table_border(line) {
            continue;
        }

        let Some(mut current) = section else {
            if !(line.contains("Device ID") && line.contains("Device Information")) {
                return Err(ParseError::structure(
                    line_number,
                    "expected table header with 'Device ID' and 'Device Information'",
                ));
            }
            section = Some(HEADER_SECTION);
            continue;
        };

        if line.contains("Device Name") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            current = parts
                .get(INDEX_TOKEN)
                .and_then(|token| token.parse::<usize>().ok())
                .ok_or_else(|| {
                    ParseError::structure(line_number, "device row does not start with an index")
                })?;
            section = Some(current);

            let name = parts
                .get(NAME_FIRST_TOKEN..parts.len().saturating_sub(1))
                .map(|tokens| tokens.join(" "))
                .unwrap_or_default();
            table.insert(current, NAME, name);
        }

        if line.contains("UUID") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            let uuid = parts.get(UUID_TOKEN).ok_or_else(|| {
                ParseError::structure(line_number, "UUID row has no value column")
            })?;
            table.insert(current, UUID, *uuid);
        }
    }

    if section.is_none() {
        return Err(ParseError::structure(0, "output ended before the table header"));
    }

    tracing::trace!(devices = table.len(), "parsed xpu-smi output");

    table
        .keys()
        .map(|device| -> Result<String, ParseError> {
            Ok(format!(
                "GPU {device}: {} (UUID: {})",
                table.require(device, NAME)?,
                table.require(device, UUID)?,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DEVICES: &str = "\
+-----------+--------------------------------------------------------------------------------------+
| Device ID | Device Information                                                                   |
+-----------+--------------------------------------------------------------------------------------+
| 0         | Device Name: Intel(R) Data Center GPU Flex 170                                       |
|           | Vendor Name: Intel(R) Corporation                                                    |
|           | SOC UUID: 00000000-0000-0000-aaaa-000000000001                                       |
|           | PCI BDF Address: 0000:4d:00.0                                                        |
+-----------+--------------------------------------------------------------------------------------+
| 1         | Device Name: Intel(R) Data Center GPU Flex 170                                       |
|           | Vendor Name: Intel(R) Corporation                                                    |
|           | SOC UUID: 00000000-0000-0000-aaaa-000000000002                                       |
|           | PCI BDF Address: 0000:4e:00.0                                                        |
+-----------+--------------------------------------------------------------------------------------+
";

    #[test]
    fn test_parse_xpu_smi_two_devices() {
        let lines = parse_xpu_smi(TWO_DEVICES).unwrap();
        assert_eq!(
            lines,
            vec![
                "GPU 0: Data Center GPU Flex 170 (UUID: 00000000-0000-0000-aaaa-000000000001)",
                "GPU 1: Data Center GPU Flex 170 (UUID: 00000000-0000-0000-aaaa-000000000002)",
            ]
        );
    }

    #[test]
    fn test_parse_xpu_smi_header_only() {
        let output = "\
+-----------+--------------------+
| Device ID | Device Information |
+-----------+--------------------+
";
        assert!(parse_xpu_smi(output).unwrap().is_empty());
    }

    #[test]
    fn test_parse_xpu_smi_rejects_missing_header() {
        let output = "\
+-----------+--------------------+
| 0         | Device Name: Intel(R) Arc A770 |
";
        match parse_xpu_smi(output).unwrap_err() {
            ParseError::Structure { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected Structure error, got: {other}"),
        }
    }

    #[test]
    fn test_parse_xpu_smi_rejects_empty_output() {
        assert!(matches!(
            parse_xpu_smi(""),
            Err(ParseError::Structure { line: 0, .. })
        ));
    }

    #[test]
    fn test_parse_xpu_smi_bad_index() {
        let output = "\
| Device ID | Device Information |
| x         | Device Name: Intel(R) Arc A770 |
";
        match parse_xpu_smi(output).unwrap_err() {
            ParseError::Structure { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected Structure error, got: {other}"),
        }
    }

    #[test]
    fn test_parse_xpu_smi_missing_uuid() {
        let output = "\
| Device ID | Device Information |
| 2         | Device Name: Intel(R) Arc A770 |
|           | Vendor Name: Intel(R) Corporation |
";
        assert_eq!(
            parse_xpu_smi(output).unwrap_err(),
            ParseError::MissingField {
                device: "2".to_string(),
                field: "uuid",
            }
        );
    }

    #[test]
    fn test_parse_xpu_smi_short_name_row() {
        // Too few tokens for a name: the name is empty rather than an error.
        let output = "\
| Device ID | Device Information |
| 0 | Device Name: X |
| | SOC UUID: abc |
";
        assert_eq!(parse_xpu_smi(output).unwrap(), vec!["GPU 0:  (UUID: abc)"]);
    }

    #[test]
    fn test_parse_xpu_smi_uuid_before_any_device() {
        let output = "\
| Device ID | Device Information |
|           | SOC UUID: orphan |
";
        assert_eq!(
            parse_xpu_smi(output).unwrap_err(),
            ParseError::MissingField {
                device: "0".to_string(),
                field: "name",
            }
        );
    }
}

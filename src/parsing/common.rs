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

// Common text helpers shared by the vendor parsers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Border row of an xpu-smi table, e.g. `+-----+-----------+`.
static TABLE_BORDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+(-)+\+(-)+\+$").unwrap());

/// Split raw tool output into lines.
///
/// Handles both `\n` and `\r\n`. A trailing newline does not produce an
/// empty final line, and empty input yields no lines at all.
pub fn split_lines(output: &str) -> Vec<&str> {
    output.lines().collect()
}

/// Turn a bracketed device tag such as `GPU[3]` into `GPU 3`.
pub fn strip_brackets(tag: &str) -> String {
    tag.replace('[', " ").replace(']', "").trim().to_string()
}

/// True for a two-column table border row made of `+` and `-` only.
pub fn is_table_border(line: &str) -> bool {
    TABLE_BORDER.is_match(line)
}

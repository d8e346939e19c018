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

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::ParseError;

/// Named string fields collected for one device.
pub type DeviceFields = HashMap<String, String>;

/// Per-device field records keyed by device index, iterated in the order
/// each index was first seen in the tool output.
#[derive(Debug, Clone)]
pub struct DeviceTable<K> {
    order: Vec<K>,
    fields: HashMap<K, DeviceFields>,
}

impl<K> Default for DeviceTable<K> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            fields: HashMap::new(),
        }
    }
}

impl<K> DeviceTable<K>
where
    K: Eq + Hash + Clone + Display,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields for `key`, creating an empty record on first sight.
    pub fn entry(&mut self, key: K) -> &mut DeviceFields {
        if !self.fields.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.fields.entry(key).or_default()
    }

    /// Set one field, replacing any earlier value for the same name.
    pub fn insert(&mut self, key: K, field: impl Into<String>, value: impl Into<String>) {
        self.entry(key).insert(field.into(), value.into());
    }

    /// Look up a field that must be present to build a summary line.
    pub fn require(&self, key: &K, field: &'static str) -> Result<&str, ParseError> {
        self.fields
            .get(key)
            .and_then(|fields| fields.get(field))
            .map(String::as_str)
            .ok_or_else(|| ParseError::MissingField {
                device: key.to_string(),
                field,
            })
    }

    /// Device keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

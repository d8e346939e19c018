// Text parsing helpers used by the vendor tool parsers.

pub mod common;
pub mod device_table;

pub use device_table::{DeviceFields, DeviceTable};

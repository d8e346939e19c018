// Common utilities for device modules: command execution and error handling.

pub mod command_executor;
pub mod error_handling;

pub use command_executor::{CommandExecutor, CommandOptions, SystemExecutor};
pub use error_handling::{DeviceError, DeviceResult};

pub mod command_timeout;

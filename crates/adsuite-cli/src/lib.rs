//! # adsuite-cli
//!
//! Management commands for the adsuite ERP backend: the command framework
//! and the built-in data-seeding commands.
//!
//! ## Modules
//!
//! - [`command`] - The `ManagementCommand` trait and `CommandRegistry`
//! - [`commands`] - Built-in commands (`initialuom`)

pub mod command;
pub mod commands;

pub use command::{CommandRegistry, ManagementCommand};
pub use commands::register_builtin_commands;

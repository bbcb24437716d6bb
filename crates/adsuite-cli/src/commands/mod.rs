//! Built-in management commands.
//!
//! Each command implements the
//! [`ManagementCommand`](crate::command::ManagementCommand) trait. Commands
//! that write business data are constructed with the store they operate on.

pub mod initial_uom;

pub use initial_uom::InitialUomCommand;

use adsuite_masterdata::uom::UomStore;

use crate::command::CommandRegistry;

/// Registers all built-in management commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry, uoms: &UomStore) {
    registry.register(Box::new(InitialUomCommand::new(uoms.clone())));
}

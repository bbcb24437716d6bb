//! # adsuite-masterdata
//!
//! Master-data records for the adsuite ERP backend: units of measure and
//! payroll allowances, with their in-memory stores and admin registrations.
//!
//! ## Modules
//!
//! - [`uom`] - Units of measure ([`Uom`](uom::Uom), [`UomStore`](uom::UomStore))
//! - [`payroll`] - Payroll allowances attached to arbitrary targets
//! - [`apps`] - Application config and admin registrations

pub mod apps;
pub mod payroll;
pub mod uom;

pub use apps::MasterdataConfig;
pub use payroll::{Payroll, PayrollStore};
pub use uom::{Uom, UomStore};

//! # adsuite-finance
//!
//! Finance records for the adsuite ERP backend: extra fees billed against
//! processing tasks, with their in-memory store and admin registration.
//!
//! ## Modules
//!
//! - [`extrafee`] - Extra fees ([`ExtraFee`](extrafee::ExtraFee), [`ExtraFeeStore`](extrafee::ExtraFeeStore))
//! - [`apps`] - Application config and admin registrations

pub mod apps;
pub mod extrafee;

pub use apps::FinanceConfig;
pub use extrafee::{ExtraFee, ExtraFeeStore};

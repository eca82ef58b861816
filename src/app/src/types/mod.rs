//! Domain-based type organization
//!
//! - config: device configuration tree and its option enums
//! - field: structured keys and raw values of bound form controls
//! - ui: toasts, field validity and indicator types for the view
//! - validation: blur-time predicates and integer coercion

pub mod config;
pub mod field;
pub mod ui;
pub mod validation;

pub use config::*;
pub use field::*;
pub use ui::*;
pub use validation::*;

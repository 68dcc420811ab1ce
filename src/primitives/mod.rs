//! # Layer 0: Primitives
//!
//! - `bool.rs`: Type-level boolean logic (True/False).

pub mod bool;

pub use bool::{And, Bool, BoolConstant, False, If, Not, Or, SelectBool, True};

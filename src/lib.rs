#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std

//! # tola-util
//!
//! Generic-programming primitives built on compile-time trait detection.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level booleans (True/False, If, And, Or, Not)             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability Predicates                                   |
//! |  - Detect probes, TypeCaps, Construct, caps_check!                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Ownership Transfer                                      |
//! |  - relocate, propagate, Binding, exchange family                  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Pair                                                    |
//! |  - Pair<A, B>, IntoPair / ConstructPair, make_pair                |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_util::prelude::*;
//!
//! // Capability queries
//! assert!(caps_check!(String: Clone & !Copy));
//! assert!(is_pair::<Pair<u8, u8>>());
//!
//! // Implicit conversion: every field converts
//! let wide: Pair<u64, String> = (1u8, "one").into();
//!
//! // Ownership transfer keeps the source valid
//! let mut name = String::from("tola");
//! let p = Pair::<String, u64>::forward(relocate(&mut name), &wide.first);
//! assert!(name.is_empty());
//! assert_eq!(p, make_pair(String::from("tola"), 1));
//! ```

// Allow `::tola_util` to work inside the crate itself
extern crate self as tola_util;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for generated detection code
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability Predicates
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 2: Ownership Transfer
// =============================================================================
pub mod transfer;

// =============================================================================
// Layer 3: Pair
// =============================================================================
pub mod pair;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Bool, BoolConstant, False, True};
pub use detect::{is_copy_constructible, is_default_constructible, is_pair, Construct, TypeCaps};
pub use transfer::{exchange, exchange_array, exchange_range, propagate, relocate};
pub use pair::{make_pair, ConstructPair, IntoPair, Pair, PairType};

// Re-export proc-macros
pub use macros::{caps_check, TypeCaps};

/// Common items for the utility layer.
pub mod prelude {
    pub use crate::detect::{Construct, TypeCaps, is_pair};
    pub use crate::pair::{make_pair, ConstructPair, IntoPair, Pair};
    pub use crate::transfer::{exchange, propagate, relocate, Binding, Owned};
    pub use macros::caps_check;
    // Note: has_impl!, is_convertible!, is_constructible!, impl_type_caps! are
    // #[macro_export] so they're at crate root
}

//! # Layer 1: Capability Predicates
//!
//! Compile-time answers to "does this type support capability C".
//!
//! ```text
//! detect/
//! ├── probe.rs     - Detect<T> inherent-const probes, has_impl!
//! ├── type_caps.rs - TypeCaps table for generic code, impl_type_caps!
//! └── construct.rs - Construct<S>, is_constructible!, is_convertible!
//! ```
//!
//! For boolean expressions over capabilities use `caps_check!`:
//!
//! ```
//! use tola_util::caps_check;
//!
//! assert!(caps_check!(String: Clone & Default & !Copy));
//! assert!(caps_check!(i32: (Clone | Debug) & PartialOrd));
//! ```

pub mod construct;
pub mod probe;
pub mod type_caps;

pub use construct::Construct;
pub use probe::{
    CloneFallback, CopyFallback, DebugFallback, DefaultFallback, Detect, PartialEqFallback,
    PartialOrdFallback,
};
pub use type_caps::{is_copy_constructible, is_default_constructible, is_pair, TypeCaps};

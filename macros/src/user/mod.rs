//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `caps_check!` | function macro | Boolean capability query |
//! | `#[derive(TypeCaps)]` | on struct/enum | Register in the capability table |

mod caps_check;
mod type_caps;

pub use caps_check::{expand_caps_check, CapsCheckInput};
pub use type_caps::expand_derive_type_caps;

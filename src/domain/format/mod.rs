// SPDX-License-Identifier: MPL-2.0
//! Format configuration types.
//!
//! This module contains the value types shared by the configuration store,
//! the option resolver and the formatting port.

pub mod kind;
pub mod options;

// Re-export commonly used types
pub use kind::FormatKind;
pub use options::{OptionValue, OptionsBag};

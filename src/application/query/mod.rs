// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! This module contains the per-invocation logic of the template helpers.
//! It only reads the configuration store; it never modifies it.
//!
//! # Available Services
//!
//! - [`resolve`]: Option resolution and the helper facade (`HelperResolver`)

pub mod resolve;

// Re-export main types
pub use resolve::{resolve_options, resolve_price_options, HelperResolver};

// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value types and pure rules.
//!
//! Nothing in here touches templates, translation files or the filesystem.
//! The only external crates used are `chrono` for calendar arithmetic and
//! `serde`/`serde_json` for the loosely typed values templates hand us.
//!
//! # Modules
//!
//! - [`date`]: Date helper input ([`DateInputForm`](date::DateInputForm),
//!   [`DateValue`](date::DateValue))
//! - [`format`]: Format configuration values ([`FormatKind`](format::FormatKind),
//!   [`OptionsBag`](format::OptionsBag))

pub mod date;
pub mod format;

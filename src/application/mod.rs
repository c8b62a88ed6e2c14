// SPDX-License-Identifier: MPL-2.0
//! Application layer - configuration and per-call orchestration.
//!
//! - [`port`]: Trait definitions for the translation and formatting collaborators
//! - [`query`]: Option resolution and the helper facade
//! - [`store`]: The per-locale format configuration table
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The Handlebars helpers use application layer services

pub mod port;
pub mod query;
pub mod store;

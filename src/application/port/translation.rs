// SPDX-License-Identifier: MPL-2.0
//! Translation port.

use crate::domain::format::OptionsBag;

/// Message lookup plus the locale currently in effect.
pub trait Translator: Send + Sync {
    /// Looks up `key` and interpolates `attributes` into the message.
    ///
    /// Implementations return something renderable for unknown keys
    /// (typically the key itself) rather than failing.
    fn translate(&self, key: &str, attributes: &OptionsBag) -> String;

    /// The active locale identifier, e.g. `"en"` or `"de-DE"`.
    fn current_locale(&self) -> String;
}

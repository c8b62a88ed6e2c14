// SPDX-License-Identifier: MPL-2.0
//! Locale tag helpers shared by the number and date formatters.

/// Primary language subtag in lowercase.
/// Examples: "ja-JP" -> "ja", "pt_BR" -> "pt", "EN" -> "en".
pub(crate) fn language(locale: &str) -> String {
    let lower = locale.to_ascii_lowercase();
    lower
        .split(['-', '_'])
        .next()
        .filter(|code| !code.is_empty())
        .unwrap_or("en")
        .to_string()
}

/// Region subtag in uppercase, if the tag carries one ("de-AT" -> "AT").
pub(crate) fn region(locale: &str) -> Option<String> {
    locale
        .split(['-', '_'])
        .skip(1)
        .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_ascii_uppercase)
}

/// CLDR number data (separators and grouping) for the tag, falling back
/// to the primary language and then to English.
pub(crate) fn number_locale(locale: &str) -> num_format::Locale {
    num_format::Locale::from_name(locale.replace('_', "-"))
        .or_else(|_| num_format::Locale::from_name(language(locale)))
        .unwrap_or(num_format::Locale::en)
}

/// Languages that write currency symbols and percent signs without a gap,
/// the currency symbol leading.
pub(crate) fn symbol_leads(language: &str) -> bool {
    matches!(language, "en" | "ja" | "zh" | "ko" | "th" | "he")
}

/// Languages whose clocks default to 12 hours.
pub(crate) fn uses_12_hour_clock(language: &str, region: Option<&str>) -> bool {
    match language {
        "en" => !matches!(region, Some("GB" | "IE")),
        "ko" | "hi" => true,
        _ => false,
    }
}

/// Locale used for month and weekday names.
pub(crate) fn chrono_locale(language: &str, region: Option<&str>) -> chrono::Locale {
    use chrono::Locale;
    match (language, region) {
        ("en", Some("GB" | "IE")) => Locale::en_GB,
        ("de", Some("AT")) => Locale::de_AT,
        ("de", Some("CH")) => Locale::de_CH,
        ("de", _) => Locale::de_DE,
        ("fr", Some("CA")) => Locale::fr_CA,
        ("fr", _) => Locale::fr_FR,
        ("es", _) => Locale::es_ES,
        ("it", _) => Locale::it_IT,
        ("pt", Some("BR")) => Locale::pt_BR,
        ("pt", _) => Locale::pt_PT,
        ("nl", _) => Locale::nl_NL,
        ("pl", _) => Locale::pl_PL,
        ("sv", _) => Locale::sv_SE,
        ("ru", _) => Locale::ru_RU,
        ("ja", _) => Locale::ja_JP,
        ("zh", _) => Locale::zh_CN,
        ("ko", _) => Locale::ko_KR,
        _ => Locale::en_US,
    }
}

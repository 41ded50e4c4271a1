//! Culture identifiers and the number/time formats derived from them.
//!
//! A [`Locale`] is resolved from a `lang[-REGION]` name (`"en-US"`,
//! `"fr-FR"`) and carries the decimal separator used for on-screen numbers
//! and sub-second timestamps. The derived format strings are recomputed on
//! every read so they can never go stale across a locale change.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use once_cell::sync::Lazy;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SettingsError;

/// Placeholder for the whole-seconds portion in the milliseconds format
/// pattern. Consumers substitute it for the captured seconds text.
pub const SECONDS_PLACEHOLDER: &str = "$1";

/// Decimal separator per language subtag.
static DECIMAL_SEPARATORS: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for lang in ["en", "ja", "ko", "zh", "hi", "th", "he", "ms", "fil"] {
        m.insert(lang, '.');
    }
    for lang in [
        "bg", "ca", "cs", "da", "de", "el", "es", "et", "eu", "fi", "fr", "gl", "hr", "hu", "id",
        "is", "it", "lt", "lv", "nb", "nl", "nn", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sr",
        "sv", "tr", "uk", "vi",
    ] {
        m.insert(lang, ',');
    }
    m
});

/// `(language, region)` pairs whose separator deviates from the language
/// default.
const REGION_EXCEPTIONS: &[(&str, &str, char)] = &[
    ("de", "CH", '.'),
    ("de", "LI", '.'),
    ("it", "CH", '.'),
    ("en", "ZA", ','),
];

// ─────────────────────────────────────────────────────────────────────────────
// Locale
// ─────────────────────────────────────────────────────────────────────────────

/// A resolved culture identifier: canonical name plus decimal separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    name: String,
    decimal_separator: char,
}

impl Locale {
    /// Resolve a locale from its name.
    ///
    /// Accepts `lang` or `lang-REGION` (case-insensitive, `_` also accepted
    /// as the separator) and canonicalizes to lowercase language and
    /// uppercase region. Names whose language is not in the separator table
    /// fail with [`SettingsError::InvalidLocale`].
    ///
    /// ```
    /// # use luxmon_settings::Locale;
    /// assert_eq!(Locale::resolve("en_us").unwrap().name(), "en-US");
    /// assert!(Locale::resolve("not a locale").is_err());
    /// ```
    pub fn resolve(name: &str) -> Result<Locale, SettingsError> {
        let invalid = || SettingsError::InvalidLocale {
            name: name.trim().to_string(),
        };

        let mut parts = name.trim().split(['-', '_']);
        let lang = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().map(|r| r.to_ascii_uppercase());
        if parts.next().is_some() {
            return Err(invalid());
        }
        if !(2..=3).contains(&lang.len()) || !lang.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        if let Some(r) = &region {
            if r.len() != 2 || !r.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(invalid());
            }
        }

        let decimal_separator = REGION_EXCEPTIONS
            .iter()
            .find(|(l, r, _)| *l == lang && Some(*r) == region.as_deref())
            .map(|(_, _, sep)| *sep)
            .or_else(|| DECIMAL_SEPARATORS.get(lang.as_str()).copied())
            .ok_or_else(invalid)?;

        let name = match &region {
            Some(r) => format!("{lang}-{r}"),
            None => lang,
        };
        Ok(Locale {
            name,
            decimal_separator,
        })
    }

    /// The running environment's locale, falling back to `en-US` when it is
    /// absent or not resolvable.
    pub fn system_default() -> Locale {
        sys_locale::get_locale()
            .and_then(|raw| {
                // Strip encoding/modifier suffixes such as ".UTF-8".
                let base = raw.split(['.', '@']).next().unwrap_or(raw.as_str());
                Locale::resolve(base).ok()
            })
            .unwrap_or_else(Locale::en_us)
    }

    fn en_us() -> Locale {
        Locale {
            name: "en-US".to_string(),
            decimal_separator: '.',
        }
    }

    /// Canonical name, e.g. `"en-US"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decimal separator character, e.g. `.` for `en-US`, `,` for `fr-FR`.
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// The milliseconds format pattern: the seconds placeholder, this
    /// locale's decimal separator, then `fff`.
    ///
    /// Recomputed on every call so it always agrees with the current locale.
    ///
    /// ```
    /// # use luxmon_settings::Locale;
    /// assert_eq!(Locale::resolve("en-US").unwrap().milliseconds_format(), "$1.fff");
    /// assert_eq!(Locale::resolve("fr-FR").unwrap().milliseconds_format(), "$1,fff");
    /// ```
    pub fn milliseconds_format(&self) -> String {
        format!("{SECONDS_PLACEHOLDER}{}fff", self.decimal_separator)
    }

    /// Render a time of day as `HH:MM:SS<sep>fff` with this locale's
    /// separator between seconds and milliseconds.
    pub fn format_time(&self, t: chrono::NaiveTime) -> String {
        let millis = (t.nanosecond() / 1_000_000).min(999);
        format!(
            "{:02}:{:02}:{:02}{}{:03}",
            t.hour(),
            t.minute(),
            t.second(),
            self.decimal_separator,
            millis
        )
    }

    /// Format a decimal number with the given number of decimal places,
    /// using this locale's separator.
    pub fn format_decimal(&self, value: f64, decimal_places: usize) -> String {
        let s = format!("{:.*}", decimal_places, value);
        if self.decimal_separator == '.' {
            s
        } else {
            s.replace('.', &self.decimal_separator.to_string())
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::system_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for Locale {
    type Err = SettingsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::resolve(s)
    }
}

// Persisted as the canonical name string. A name that no longer resolves
// fails the whole deserialization; the settings store converts that into
// defaults plus one user-facing notification.
impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Locale::resolve(&name).map_err(D::Error::custom)
    }
}

//! Locale-aware ordering of file names
//!
//! Backed by the ICU4X collator with the site language, so names sort the
//! way a reader of that language expects: accents next to their base letter,
//! `ß` as `ss`, punctuation in CLDR order ahead of digits and letters.
//! Remaining ties fall back to byte order so the ordering is total.

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use std::cmp::Ordering;

use crate::error::{BuildError, Result};

/// Compares file names for one language
pub struct NameCollator {
    collator: Collator,
}

impl NameCollator {
    /// Create a collator for a BCP 47 language tag such as `nl`
    pub fn new(language: &str) -> Result<Self> {
        let locale: Locale = language.parse().map_err(|e| BuildError::Locale {
            language: language.to_string(),
            reason: format!("{:?}", e),
        })?;
        let collator = Collator::try_new(&(&locale).into(), CollatorOptions::new()).map_err(
            |e| BuildError::Locale {
                language: language.to_string(),
                reason: format!("{:?}", e),
            },
        )?;
        Ok(Self { collator })
    }

    /// Compare two names the way a human reader expects them ordered
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b).then_with(|| a.cmp(b))
    }

    /// Sort names in place
    pub fn sort(&self, names: &mut [String]) {
        names.sort_by(|a, b| self.compare(a, b));
    }
}

//! Closed set of translation keys
//!
//! The enum itself is generated by the build script from
//! `locales/en/main.ftl`, after checking that every locale defines the same
//! message ids and variables.

use std::fmt;

include!(concat!(env!("OUT_DIR"), "/translation_keys.rs"));

impl TranslationKey {
    /// Look up a key by its Fluent message id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.id() == id)
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl AsRef<str> for TranslationKey {
    fn as_ref(&self) -> &str {
        self.id()
    }
}

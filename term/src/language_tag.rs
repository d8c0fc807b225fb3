//! I define the [`LanguageTag`] wrapper type,
//! which guarantees that the underlying `str`
//! is a well-formed [BCP47](https://tools.ietf.org/html/bcp47) language tag.
use crate::{Result, TermError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The overall shape of a BCP47 language tag:
    /// a primary subtag of 1-8 letters,
    /// followed by any number of subtags of 1-8 letters or digits.
    static ref LANG_TAG: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z]{1,8}
      ( - [A-Za-z0-9]{1,8} )*
      $
    ").unwrap();
}

/// A [BCP47](https://tools.ietf.org/html/bcp47) language tag,
/// as carried by language-tagged string literals.
///
/// Language tags are compared case-insensitively;
/// this wrapper normalizes to lowercase at construction,
/// so that derived equality and hashing remain structural.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub struct LanguageTag(Box<str>);

impl LanguageTag {
    /// Build a new language tag, checking that `tag` is well-formed.
    pub fn new(tag: impl AsRef<str>) -> Result<Self> {
        let tag = tag.as_ref();
        if LANG_TAG.is_match(tag) {
            Ok(LanguageTag(tag.to_ascii_lowercase().into()))
        } else {
            Err(TermError::InvalidLanguageTag(tag.to_string()))
        }
    }

    /// The (lowercased) text of this language tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! I define the [`Literal`] type and its construction rules.
//!
//! A literal always carries an *effective* datatype:
//! `rdf:langString` if and only if a language tag is present,
//! and an explicit datatype IRI (defaulting to `xsd:string`) otherwise.
//! This invariant is established at construction and preserved by all
//! `with_*` transforms, so derived equality and hashing stay consistent.
//!
//! # Conflict policy
//!
//! Building a literal with *both* a non-empty language tag and a datatype
//! other than `rdf:langString` is rejected with
//! [`TermError::InvalidLiteral`], rather than letting one side take
//! precedence. Every constructed literal is therefore canonical.
use crate::language_tag::LanguageTag;
use crate::named_node::is_absolute_iri;
use crate::ns::{rdf, xsd};
use crate::{Result, TermError};

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal).
///
/// Two literals are equal if and only if their lexical form, datatype and
/// language tag all match.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub struct Literal {
    lexical_form: Box<str>,
    datatype: Box<str>,
    lang: Option<LanguageTag>,
}

impl Literal {
    /// Build a literal from a lexical form and optional language tag and
    /// datatype IRI.
    ///
    /// An absent or empty `lang` means "no language tag";
    /// an absent `datatype` defaults to `xsd:string`
    /// (or `rdf:langString` when a language tag is given).
    /// See the [module documentation](self) for the conflict policy.
    pub fn new(
        lexical_form: impl Into<Box<str>>,
        lang: Option<&str>,
        datatype: Option<&str>,
    ) -> Result<Self> {
        let lexical_form = lexical_form.into();
        let lang = match lang {
            None | Some("") => None,
            Some(tag) => Some(LanguageTag::new(tag)?),
        };
        match (lang, datatype) {
            (Some(lang), None) => Ok(Literal {
                lexical_form,
                datatype: rdf::langString.into(),
                lang: Some(lang),
            }),
            (Some(lang), Some(dt)) if dt == rdf::langString => Ok(Literal {
                lexical_form,
                datatype: rdf::langString.into(),
                lang: Some(lang),
            }),
            (Some(lang), Some(dt)) => Err(TermError::InvalidLiteral(format!(
                "language tag '{}' conflicts with datatype '{}'",
                lang.as_str(),
                dt
            ))),
            (None, Some(dt)) if dt == rdf::langString => Err(TermError::InvalidLiteral(
                "rdf:langString requires a language tag".to_string(),
            )),
            (None, Some(dt)) => Self::typed(lexical_form, dt),
            (None, None) => Ok(Self::string(lexical_form)),
        }
    }

    /// Build an `xsd:string` literal.
    pub fn string(lexical_form: impl Into<Box<str>>) -> Self {
        Literal {
            lexical_form: lexical_form.into(),
            datatype: xsd::string.into(),
            lang: None,
        }
    }

    /// Build a literal with an explicit datatype IRI.
    ///
    /// Fails if `datatype` is empty, not an absolute IRI,
    /// or `rdf:langString` (which requires a language tag,
    /// see [`Literal::lang_tagged`]).
    pub fn typed(lexical_form: impl Into<Box<str>>, datatype: &str) -> Result<Self> {
        if datatype == rdf::langString {
            return Err(TermError::InvalidLiteral(
                "rdf:langString requires a language tag".to_string(),
            ));
        }
        if !is_absolute_iri(datatype) {
            return Err(TermError::InvalidIri(datatype.to_string()));
        }
        Ok(Literal {
            lexical_form: lexical_form.into(),
            datatype: datatype.into(),
            lang: None,
        })
    }

    /// Build a language-tagged string (`rdf:langString`).
    ///
    /// Fails if `tag` is empty or not a well-formed BCP47 tag.
    pub fn lang_tagged(lexical_form: impl Into<Box<str>>, tag: &str) -> Result<Self> {
        let lang = LanguageTag::new(tag)?;
        Ok(Literal {
            lexical_form: lexical_form.into(),
            datatype: rdf::langString.into(),
            lang: Some(lang),
        })
    }

    /// The lexical form of this literal.
    ///
    /// Always available, whatever the datatype.
    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    /// The effective datatype IRI of this literal.
    ///
    /// This is `rdf:langString` if and only if
    /// [`language_tag`](Literal::language_tag) returns `Some`;
    /// it is never absent.
    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    /// The language tag of this literal, if any.
    ///
    /// Returns `None` (never an empty tag) for plain and typed literals.
    pub fn language_tag(&self) -> Option<&LanguageTag> {
        self.lang.as_ref()
    }

    /// Interpret this literal as a boolean.
    ///
    /// Returns `None` unless the datatype is `xsd:boolean`
    /// and the lexical form is one of `true`, `false`, `1`, `0`.
    pub fn as_bool(&self) -> Option<bool> {
        if &*self.datatype != xsd::boolean {
            return None;
        }
        match &*self.lexical_form {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    /// Interpret this literal as an integer.
    ///
    /// Returns `None` unless the datatype is `xsd:integer`
    /// and the lexical form parses as an `i64`.
    pub fn as_integer(&self) -> Option<i64> {
        if &*self.datatype != xsd::integer {
            return None;
        }
        self.lexical_form.parse().ok()
    }

    /// Interpret this literal as a decimal number.
    ///
    /// Returns `None` unless the datatype is `xsd:decimal` or `xsd:double`
    /// and the lexical form parses as an `f64`.
    pub fn as_decimal(&self) -> Option<f64> {
        if &*self.datatype != xsd::decimal && &*self.datatype != xsd::double {
            return None;
        }
        self.lexical_form.parse().ok()
    }

    /// Return a new literal with the given lexical form,
    /// keeping datatype and language tag.
    pub fn with_lexical_form(&self, lexical_form: impl Into<Box<str>>) -> Self {
        Literal {
            lexical_form: lexical_form.into(),
            datatype: self.datatype.clone(),
            lang: self.lang.clone(),
        }
    }

    /// Return a new literal with the given language tag.
    ///
    /// A non-empty tag forces the datatype to `rdf:langString`;
    /// an absent or empty tag forces it to `xsd:string`,
    /// discarding any previous datatype.
    pub fn with_language_tag(&self, tag: Option<&str>) -> Result<Self> {
        match tag {
            None | Some("") => Ok(Literal {
                lexical_form: self.lexical_form.clone(),
                datatype: xsd::string.into(),
                lang: None,
            }),
            Some(tag) => Ok(Literal {
                lexical_form: self.lexical_form.clone(),
                datatype: rdf::langString.into(),
                lang: Some(LanguageTag::new(tag)?),
            }),
        }
    }

    /// Return a new literal with the given datatype,
    /// discarding any previous language tag.
    ///
    /// Fails with [`TermError::InvalidDatatypeTransition`] if `datatype`
    /// is empty or `rdf:langString`:
    /// that transition requires a non-empty language tag
    /// and must go through [`with_language_tag`](Literal::with_language_tag).
    pub fn with_datatype(&self, datatype: &str) -> Result<Self> {
        if datatype.is_empty() || datatype == rdf::langString {
            return Err(TermError::InvalidDatatypeTransition(datatype.to_string()));
        }
        if !is_absolute_iri(datatype) {
            return Err(TermError::InvalidIri(datatype.to_string()));
        }
        Ok(Literal {
            lexical_form: self.lexical_form.clone(),
            datatype: datatype.into(),
            lang: None,
        })
    }
}

impl From<bool> for Literal {
    /// The lexical form is `"true"` or `"false"`,
    /// so that `false` round-trips through [`Literal::as_bool`].
    fn from(value: bool) -> Literal {
        Literal {
            lexical_form: if value { "true" } else { "false" }.into(),
            datatype: xsd::boolean.into(),
            lang: None,
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Literal {
        Literal {
            lexical_form: value.to_string().into(),
            datatype: xsd::integer.into(),
            lang: None,
        }
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Literal {
        Literal::from(value as i64)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Literal {
        Literal {
            lexical_form: value.to_string().into(),
            datatype: xsd::decimal.into(),
            lang: None,
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Literal {
        Literal::string(value)
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Literal {
        Literal::string(value)
    }
}

//! IRI constants for the most common namespaces.
//!
//! Terms are exposed as `&str` constants named after the vocabulary term,
//! e.g. [`xsd::string`] or [`rdf::langString`].

macro_rules! namespace {
    ($base:literal, $($term:ident),* $(,)?) => {
        /// The base IRI of this namespace.
        pub const BASE: &str = $base;
        $(
            #[allow(non_upper_case_globals)]
            #[doc = concat!("The IRI of the `", stringify!($term), "` term.")]
            pub const $term: &str = concat!($base, stringify!($term));
        )*
    };
}

/// The standard `rdf:` namespace.
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // datatypes
        HTML,
        JSON,
        langString,
        XMLLiteral,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil,
    );
}

/// The standard `xsd:` namespace.
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyURI,
        boolean,
        byte,
        date,
        dateTime,
        decimal,
        double,
        float,
        int,
        integer,
        long,
        short,
        string,
    );
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn terms_concatenate_base() {
        assert_eq!(xsd::string, "http://www.w3.org/2001/XMLSchema#string");
        assert_eq!(
            rdf::langString,
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"
        );
        assert!(xsd::boolean.starts_with(xsd::BASE));
    }
}

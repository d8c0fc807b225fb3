// this module is transparently re-exported by the crate root
//
// Implement the Display trait for terms and quads,
// using the N-Quads family of syntax.
// The rendering is deterministic for a given value.

use std::fmt;

use crate::literal::Literal;
use crate::ns::xsd;
use crate::quad::Quad;
use crate::{BlankNode, NamedNode, Term};

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri())
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.local_id())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, self.lexical_form())?;
        if let Some(tag) = self.language_tag() {
            write!(f, "@{}", tag.as_str())
        } else if self.datatype() != xsd::string {
            // xsd:string is implicit in N-Quads
            write!(f, "^^<{}>", self.datatype())
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(n) => n.fmt(f),
            Term::BlankNode(b) => b.fmt(f),
            Term::Literal(l) => l.fmt(f),
            // no surface syntax; only ever rendered standalone
            Term::DefaultGraph => f.write_str("DEFAULT"),
            Term::Quad(q) => {
                write!(f, "<< {} {} {}", q.s(), q.p(), q.o())?;
                if !q.g().is_default_graph() {
                    write!(f, " {}", q.g())?;
                }
                f.write_str(" >>")
            }
        }
    }
}

impl fmt::Display for Quad {
    /// One N-Quads statement; the graph name is omitted when it is the
    /// default graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.s(), self.p(), self.o())?;
        if !self.g().is_default_graph() {
            write!(f, " {}", self.g())?;
        }
        f.write_str(" .")
    }
}

/// Write `txt` as a double-quoted N-Quads string, escaping as needed.
fn write_quoted(f: &mut fmt::Formatter<'_>, txt: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in txt.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            _ => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

#[cfg(test)]
mod test {
    use crate::*;

    fn nn(iri: &str) -> Term {
        NamedNode::new_unchecked(iri).into()
    }

    #[test]
    fn named_node() {
        assert_eq!(nn("http://example.org/foo").to_string(), "<http://example.org/foo>");
    }

    #[test]
    fn blank_node() {
        let t: Term = BlankNode::new_unchecked("foo_bar.baz").into();
        assert_eq!(t.to_string(), "_:foo_bar.baz");
    }

    #[test]
    fn string_literal_implicit_datatype() {
        let t: Term = Literal::string("hello").into();
        assert_eq!(t.to_string(), "\"hello\"");
    }

    #[test]
    fn escaped_literal() {
        let t: Term = Literal::string("say \"hi\"\n\\done").into();
        assert_eq!(t.to_string(), "\"say \\\"hi\\\"\\n\\\\done\"");
    }

    #[test]
    fn typed_literal() {
        let t: Term = Literal::from(42i64).into();
        assert_eq!(
            t.to_string(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn lang_literal() {
        let t: Term = Literal::lang_tagged("chat", "fr").unwrap().into();
        assert_eq!(t.to_string(), "\"chat\"@fr");
    }

    #[test]
    fn quad_in_default_graph() {
        let q = Quad::triple(nn("tag:s"), nn("tag:p"), nn("tag:o")).unwrap();
        assert_eq!(q.to_string(), "<tag:s> <tag:p> <tag:o> .");
    }

    #[test]
    fn quad_in_named_graph() {
        let q = Quad::new(nn("tag:s"), nn("tag:p"), nn("tag:o"), nn("tag:g")).unwrap();
        assert_eq!(q.to_string(), "<tag:s> <tag:p> <tag:o> <tag:g> .");
    }

    #[test]
    fn nested_quad_term() {
        let inner = Quad::triple(nn("tag:s"), nn("tag:p"), nn("tag:o")).unwrap();
        let q = Quad::triple(inner.into_term(), nn("tag:says"), Literal::string("x").into())
            .unwrap();
        assert_eq!(
            q.to_string(),
            "<< <tag:s> <tag:p> <tag:o> >> <tag:says> \"x\" ."
        );
    }
}

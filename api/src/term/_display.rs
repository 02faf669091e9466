// Implement the Display trait for SimpleTerm, using the N-Triples syntax.

use super::*;
use std::fmt;

impl fmt::Display for SimpleTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleTerm::Iri(iri) => write!(f, "<{}>", iri.as_str()),
            SimpleTerm::BlankNode(id) => write!(f, "_:{}", id.as_str()),
            SimpleTerm::Literal(lex, tag, dt) => {
                f.write_str("\"")?;
                write_quoted_string(f, lex)?;
                f.write_str("\"")?;
                // N-Triples has no syntax for a literal with both
                match (tag, dt) {
                    (Some(tag), _) => write!(f, "@{tag}"),
                    (None, Some(dt)) => write!(f, "^^<{}>", dt.as_str()),
                    (None, None) => Ok(()),
                }
            }
        }
    }
}

fn write_quoted_string(w: &mut impl fmt::Write, txt: &str) -> fmt::Result {
    let mut start = 0;
    for (pos, chr) in txt.char_indices() {
        let escaped = match chr {
            '\n' => "\\n",
            '\r' => "\\r",
            '"' => "\\\"",
            '\\' => "\\\\",
            _ => continue,
        };
        w.write_str(&txt[start..pos])?;
        w.write_str(escaped)?;
        start = pos + 1;
    }
    w.write_str(&txt[start..])
}

use crate::RdfJsonError;
use rdfjson_api::term::SimpleTerm;

/// The term object being read.
///
/// Attribute keys select which attribute the next string fills;
/// a repeated attribute overwrites the previous value.
#[derive(Clone, Debug, Default)]
pub(crate) struct PendingTerm {
    kind: TermType,
    value: Option<String>,
    language: Option<String>,
    datatype: Option<String>,
    attribute: Option<Attribute>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum TermType {
    #[default]
    Unknown,
    Uri,
    Literal,
    Bnode,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Attribute {
    Value,
    Type,
    Lang,
    Datatype,
}

impl PendingTerm {
    /// Forget everything about the previous term.
    pub(crate) fn begin(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn select_attribute(&mut self, key: &str) -> Result<(), RdfJsonError> {
        self.attribute = match key {
            "value" => Some(Attribute::Value),
            "type" => Some(Attribute::Type),
            "lang" => Some(Attribute::Lang),
            "datatype" => Some(Attribute::Datatype),
            _ => None,
        };
        match self.attribute {
            Some(_) => Ok(()),
            None => Err(RdfJsonError::UnexpectedTermKey(key.to_string())),
        }
    }

    /// Store `txt` into the selected attribute.
    ///
    /// An unknown `type` leaves the term type unknown
    /// and fails with the recoverable [`RdfJsonError::UnknownTermType`].
    pub(crate) fn set_value(&mut self, txt: &str) -> Result<(), RdfJsonError> {
        match self.attribute {
            None => return Err(RdfJsonError::UnassignedValue(txt.to_string())),
            Some(Attribute::Value) => self.value = Some(txt.to_string()),
            Some(Attribute::Lang) => self.language = Some(txt.to_string()),
            Some(Attribute::Datatype) => self.datatype = Some(txt.to_string()),
            Some(Attribute::Type) => match txt {
                "uri" => self.kind = TermType::Uri,
                "literal" => self.kind = TermType::Literal,
                "bnode" => self.kind = TermType::Bnode,
                _ => {
                    self.kind = TermType::Unknown;
                    return Err(RdfJsonError::UnknownTermType(txt.to_string()));
                }
            },
        }
        Ok(())
    }

    /// Build the term, and leave this accumulator empty.
    pub(crate) fn finalize(&mut self) -> Result<SimpleTerm, RdfJsonError> {
        let PendingTerm {
            kind,
            value,
            language,
            datatype,
            ..
        } = std::mem::take(self);
        let value = value.ok_or(RdfJsonError::MissingValue)?;
        if let Some(id) = blank_node_label(&value) {
            return Ok(SimpleTerm::new_bnode(id)?);
        }
        Ok(match kind {
            TermType::Uri => SimpleTerm::new_iri(&value)?,
            TermType::Literal => {
                SimpleTerm::new_literal(&value, language.as_deref(), datatype.as_deref())?
            }
            TermType::Bnode => SimpleTerm::new_bnode(&value)?,
            TermType::Unknown => return Err(RdfJsonError::UnsupportedTermType),
        })
    }
}

/// The identifier of `txt` if it has the form `_:<id>` with a non-empty `<id>`.
fn blank_node_label(txt: &str) -> Option<&str> {
    txt.strip_prefix("_:").filter(|id| !id.is_empty())
}

/// Build the term named by a key of the resource map form:
/// a blank node for `_:<id>`, an IRI otherwise.
pub(crate) fn term_from_key(key: &str) -> Result<SimpleTerm, RdfJsonError> {
    let term = match blank_node_label(key) {
        Some(id) => SimpleTerm::new_bnode(id),
        None => SimpleTerm::new_iri(key),
    };
    Ok(term?)
}

use super::bnode_id::InvalidBnodeId;
use rdfjson_iri::InvalidIri;
use thiserror::Error;

/// This error is raised when a term can not be built from the given text.
#[derive(Debug, Error)]
pub enum TermError {
    /// The text of an IRI term, or of a literal's datatype, is not a valid IRI reference
    #[error(transparent)]
    InvalidIri(#[from] InvalidIri),
    /// The text of a blank node term is not a valid identifier
    #[error(transparent)]
    InvalidBnodeId(#[from] InvalidBnodeId),
}

//! Defines types for configuring RDF/JSON parsing.

/// Options of the RDF/JSON parser.
#[derive(Clone, Debug, Default)]
pub struct RdfJsonOptions {
    strict: bool,
}

impl RdfJsonOptions {
    /// Build new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether recoverable errors (such as a triple missing one of its terms)
    /// abort parsing instead of being reported as warnings.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Change the [`strict`](Self::strict) flag.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

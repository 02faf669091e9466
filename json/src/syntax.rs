//! Description of the RDF/JSON syntax,
//! and guessing whether some content is written in it.

/// Static description of a syntax.
#[derive(Clone, Copy, Debug)]
pub struct SyntaxDescription {
    /// Short names of the syntax
    pub names: &'static [&'static str],
    /// Human-readable label
    pub label: &'static str,
    /// MIME types, with their quality (0 to 10)
    pub mime_types: &'static [(&'static str, u8)],
}

/// The description of RDF/JSON.
pub const RDF_JSON: SyntaxDescription = SyntaxDescription {
    names: &["json"],
    label: "JSON",
    mime_types: &[("application/json", 1), ("text/json", 1)],
};

/// Score how likely it is that some content is RDF/JSON; higher is more likely.
///
/// * `buffer`: the first bytes of the content
/// * `identifier`: a file name or IRI naming the content
/// * `suffix`: the extension of `identifier`, without the dot
/// * `mime_type`: the declared media type of the content
pub fn recognise_syntax(
    buffer: &[u8],
    identifier: Option<&str>,
    suffix: Option<&str>,
    mime_type: Option<&str>,
) -> u32 {
    let mut score = match (suffix, identifier) {
        (Some("json"), _) => 8,
        (Some("js"), _) => 3,
        (Some(_), _) => 0,
        (None, Some(id)) if id.contains("json") => 4,
        (None, _) => 0,
    };
    if mime_type.is_some_and(|mt| mt.contains("json")) {
        score += 6;
    }
    // C-style isspace, including vertical tab and form feed
    let first = buffer
        .iter()
        .find(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c'));
    if first == Some(&b'{') {
        score += 2;
    }
    score
}

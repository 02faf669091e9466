//! Events of a streaming JSON tokenizer.

/// A single token reported by a streaming JSON tokenizer.
///
/// String payloads are only borrowed for the duration of the call
/// that delivers the event; whoever needs them longer must copy them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JsonEvent<'a> {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// A number, in its textual representation
    Number(&'a str),
    /// A string value (not a map key)
    String(&'a str),
    /// `{`
    StartMap,
    /// A key inside a map
    MapKey(&'a str),
    /// `}`
    EndMap,
    /// `[`
    StartArray,
    /// `]`
    EndArray,
    /// End of the input
    End,
}

impl JsonEvent<'_> {
    /// A short human-readable description of this kind of event, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            JsonEvent::Null => "null",
            JsonEvent::Boolean(_) => "boolean",
            JsonEvent::Number(_) => "number",
            JsonEvent::String(_) => "string",
            JsonEvent::StartMap => "start of map",
            JsonEvent::MapKey(_) => "map key",
            JsonEvent::EndMap => "end of map",
            JsonEvent::StartArray => "start of array",
            JsonEvent::EndArray => "end of array",
            JsonEvent::End => "end of input",
        }
    }
}

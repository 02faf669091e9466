use super::{IriRef, Result};
use serde::{
    de::{Error, Unexpected},
    Deserialize, Serialize,
};
use std::borrow::Borrow;

impl<'a, T: Borrow<str> + Deserialize<'a>> Deserialize<'a> for IriRef<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let inner: T = T::deserialize(deserializer)?;
        Self::new(inner)
            .map_err(|err| D::Error::invalid_value(Unexpected::Str(&err.0), &"valid IRI reference"))
    }
}

impl<T: Borrow<str>> Serialize for IriRef<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Described {
        about: IriRef<String>,
        datatype: Option<IriRef<String>>,
    }

    #[test]
    fn valid_iri_refs() {
        let json = r##"{"about":"http://example.org/s","datatype":"#int"}"##;
        let data: Described = serde_json::from_str(json).unwrap();
        assert_eq!(data.about.as_str(), "http://example.org/s");
        assert_eq!(data.datatype.unwrap().as_str(), "#int");
    }

    #[test]
    fn invalid_iri_ref() {
        let json = r#"{"about":"a b","datatype":null}"#;
        assert!(serde_json::from_str::<Described>(json).is_err());
    }

    #[test]
    fn serialize_as_plain_string() {
        let data = Described {
            about: IriRef::new("http://example.org/s".into()).unwrap(),
            datatype: None,
        };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"about":"http://example.org/s","datatype":null}"#);
    }
}

//! Walk a JSON document with `serde_json`,
//! feeding each token to a [`RdfJsonHandler`] as soon as it is read.

use crate::event::JsonEvent;
use crate::handler::RdfJsonHandler;
use crate::RdfJsonError;
use rdfjson_api::source::{SourceError, StreamError, StreamResult};
use rdfjson_api::term::SimpleTerm;
use rdfjson_api::Error;
use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use std::fmt;
use std::io::Read;

/// Feed the whole of `read` to `handler`, followed by [`JsonEvent::End`].
pub(crate) fn drive<R, F, E>(
    read: R,
    handler: &mut RdfJsonHandler,
    sink: &mut F,
) -> StreamResult<(), RdfJsonError, E>
where
    R: Read,
    F: FnMut([&SimpleTerm; 3]) -> Result<(), E>,
    E: Error,
{
    let mut driver = Driver {
        handler,
        sink,
        failure: None,
    };
    let mut de = serde_json::Deserializer::from_reader(read);
    let res = Feed(&mut driver)
        .deserialize(&mut de)
        .and_then(|()| de.end());
    match res {
        Ok(()) => driver.handler.handle(JsonEvent::End, &mut *driver.sink),
        Err(err) => match driver.failure.take() {
            // the handler (or the sink) stopped the walk
            Some(failure) => Err(failure),
            None => {
                driver.handler.halt();
                Err(SourceError(RdfJsonError::Json(err)))
            }
        },
    }
}

struct Driver<'h, 's, F, E>
where
    E: Error,
{
    handler: &'h mut RdfJsonHandler,
    sink: &'s mut F,
    failure: Option<StreamError<RdfJsonError, E>>,
}

impl<F, E> Driver<'_, '_, F, E>
where
    F: FnMut([&SimpleTerm; 3]) -> Result<(), E>,
    E: Error,
{
    /// Pass `event` to the handler;
    /// if it fails, keep the failure and abort the walk.
    fn feed<Er: de::Error>(&mut self, event: JsonEvent<'_>) -> Result<(), Er> {
        self.handler.handle(event, &mut *self.sink).map_err(|failure| {
            let msg = failure.to_string();
            self.failure = Some(failure);
            Er::custom(msg)
        })
    }
}

struct Feed<'d, 'h, 's, F, E>(&'d mut Driver<'h, 's, F, E>)
where
    E: Error;

impl<'de, F, E> DeserializeSeed<'de> for Feed<'_, '_, '_, F, E>
where
    F: FnMut([&SimpleTerm; 3]) -> Result<(), E>,
    E: Error,
{
    type Value = ();

    fn deserialize<D: de::Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de, F, E> Visitor<'de> for Feed<'_, '_, '_, F, E>
where
    F: FnMut([&SimpleTerm; 3]) -> Result<(), E>,
    E: Error,
{
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_unit<Er: de::Error>(self) -> Result<(), Er> {
        self.0.feed(JsonEvent::Null)
    }

    fn visit_bool<Er: de::Error>(self, v: bool) -> Result<(), Er> {
        self.0.feed(JsonEvent::Boolean(v))
    }

    fn visit_i64<Er: de::Error>(self, v: i64) -> Result<(), Er> {
        self.0.feed(JsonEvent::Number(&v.to_string()))
    }

    fn visit_u64<Er: de::Error>(self, v: u64) -> Result<(), Er> {
        self.0.feed(JsonEvent::Number(&v.to_string()))
    }

    fn visit_f64<Er: de::Error>(self, v: f64) -> Result<(), Er> {
        // Debug always shows a fractional part or an exponent
        self.0.feed(JsonEvent::Number(&format!("{v:?}")))
    }

    fn visit_str<Er: de::Error>(self, v: &str) -> Result<(), Er> {
        self.0.feed(JsonEvent::String(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        let driver = self.0;
        driver.feed(JsonEvent::StartMap)?;
        while let Some(key) = map.next_key::<String>()? {
            driver.feed(JsonEvent::MapKey(&key))?;
            map.next_value_seed(Feed(&mut *driver))?;
        }
        driver.feed(JsonEvent::EndMap)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        let driver = self.0;
        driver.feed(JsonEvent::StartArray)?;
        while seq.next_element_seed(Feed(&mut *driver))?.is_some() {}
        driver.feed(JsonEvent::EndArray)
    }
}

use super::*;
use rdfjson_api::source::StreamError;
use rdfjson_api::triple::Triple;
use std::convert::Infallible;
use test_case::test_case;
use crate::event::JsonEvent::{End, EndArray, EndMap, MapKey, StartArray, StartMap};

const S: &str = "http://example.org/s";
const P: &str = "http://example.org/p";

fn text(txt: &str) -> JsonEvent<'_> {
    JsonEvent::String(txt)
}

/// The events of a term object with the given value and type.
fn term<'a>(value: &'a str, kind: &'a str) -> Vec<JsonEvent<'a>> {
    vec![
        StartMap,
        MapKey("value"),
        text(value),
        MapKey("type"),
        text(kind),
        EndMap,
    ]
}

/// The events of a triple object, with the slots given as (key, term events).
fn triple<'a>(slots: Vec<(&'a str, Vec<JsonEvent<'a>>)>) -> Vec<JsonEvent<'a>> {
    let mut events = vec![StartMap];
    for (key, term) in slots {
        events.push(MapKey(key));
        events.extend(term);
    }
    events.push(EndMap);
    events
}

fn triples_doc(triples: Vec<Vec<JsonEvent<'_>>>) -> Vec<JsonEvent<'_>> {
    let mut events = vec![StartMap, MapKey("triples"), StartArray];
    events.extend(triples.into_iter().flatten());
    events.extend([EndArray, EndMap, End]);
    events
}

fn iri(txt: &str) -> SimpleTerm {
    SimpleTerm::new_iri(txt).unwrap()
}

fn lit(txt: &str) -> SimpleTerm {
    SimpleTerm::new_literal(txt, None, None).unwrap()
}

fn bnode(id: &str) -> SimpleTerm {
    SimpleTerm::new_bnode(id).unwrap()
}

/// Feed all events to `handler`, stopping at the first error.
fn feed(
    handler: &mut RdfJsonHandler,
    events: &[JsonEvent],
) -> Result<Vec<[SimpleTerm; 3]>, RdfJsonError> {
    let mut triples = vec![];
    for event in events {
        handler
            .handle(
                *event,
                &mut |t: [&SimpleTerm; 3]| -> Result<(), Infallible> {
                    triples.push(t.to_simple());
                    Ok(())
                },
            )
            .map_err(StreamError::unwrap_source_error)?;
    }
    Ok(triples)
}

fn parse(events: &[JsonEvent]) -> Result<Vec<[SimpleTerm; 3]>, RdfJsonError> {
    feed(&mut RdfJsonHandler::default(), events)
}

#[test]
fn empty_document() {
    let mut h = RdfJsonHandler::default();
    assert!(feed(&mut h, &[StartMap, EndMap, End]).unwrap().is_empty());
    assert_eq!(h.state(), ParseState::Root);
}

#[test]
fn triples_form_states() {
    let mut h = RdfJsonHandler::default();
    let steps = [
        (StartMap, ParseState::MapRoot),
        (MapKey("triples"), ParseState::Triples(TriplesState::Key)),
        (StartArray, ParseState::Triples(TriplesState::Array)),
        (StartMap, ParseState::Triples(TriplesState::Triple(None))),
        (
            MapKey("object"),
            ParseState::Triples(TriplesState::Triple(Some(Slot::Object))),
        ),
        (
            StartMap,
            ParseState::Triples(TriplesState::Term(Some(Slot::Object))),
        ),
    ];
    for (event, expected) in steps {
        feed(&mut h, &[event]).unwrap();
        assert_eq!(h.state(), expected);
    }
    // a term map can not be closed by an array end
    let err = feed(&mut h, &[EndArray]).unwrap_err();
    assert!(matches!(
        err,
        RdfJsonError::UnexpectedEvent {
            found: "end of array",
            ..
        }
    ));
}

#[test]
fn triples_form() {
    let events = triples_doc(vec![triple(vec![
        ("subject", term(S, "uri")),
        ("predicate", term(P, "uri")),
        ("object", term("hi", "literal")),
    ])]);
    assert_eq!(parse(&events).unwrap(), vec![[iri(S), iri(P), lit("hi")]]);
}

#[test]
fn triples_form_slot_order_is_free() {
    let events = triples_doc(vec![triple(vec![
        ("object", term("_:o", "bnode")),
        ("subject", term("_:s", "bnode")),
        ("predicate", term(P, "uri")),
    ])]);
    assert_eq!(parse(&events).unwrap(), vec![[bnode("s"), iri(P), bnode("o")]]);
}

#[test]
fn triple_emitted_when_its_map_ends() {
    let mut h = RdfJsonHandler::default();
    let mut events = vec![StartMap, MapKey("triples"), StartArray];
    events.extend(triple(vec![
        ("subject", term(S, "uri")),
        ("predicate", term(P, "uri")),
        ("object", term("o", "literal")),
    ]));
    let (last, before) = events.split_last().unwrap();
    assert!(feed(&mut h, before).unwrap().is_empty());
    assert_eq!(feed(&mut h, &[*last]).unwrap().len(), 1);
    assert_eq!(h.state(), ParseState::Triples(TriplesState::Array));
}

#[test]
fn resource_form() {
    let mut events = vec![StartMap, MapKey(S), StartMap, MapKey(P), StartArray];
    events.extend(term("a", "literal"));
    events.extend(term("http://example.org/o", "uri"));
    events.extend([EndArray, EndMap, EndMap, End]);
    assert_eq!(
        parse(&events).unwrap(),
        vec![
            [iri(S), iri(P), lit("a")],
            [iri(S), iri(P), iri("http://example.org/o")],
        ]
    );
}

#[test]
fn resource_form_states() {
    let mut h = RdfJsonHandler::default();
    let steps = [
        (StartMap, ParseState::MapRoot),
        (MapKey("_:s"), ParseState::Resources(ResourcesState::SubjectKey)),
        (StartMap, ParseState::Resources(ResourcesState::Predicate)),
        (MapKey(P), ParseState::Resources(ResourcesState::Predicate)),
        (StartArray, ParseState::Resources(ResourcesState::ObjectArray)),
        (StartMap, ParseState::Resources(ResourcesState::Object)),
        (MapKey("value"), ParseState::Resources(ResourcesState::Object)),
        (text("_:o"), ParseState::Resources(ResourcesState::Object)),
        (EndMap, ParseState::Resources(ResourcesState::ObjectArray)),
        (EndArray, ParseState::Resources(ResourcesState::Predicate)),
        (EndMap, ParseState::MapRoot),
        (EndMap, ParseState::Root),
    ];
    let mut emitted = vec![];
    for (event, expected) in steps {
        emitted.extend(feed(&mut h, &[event]).unwrap());
        assert_eq!(h.state(), expected);
    }
    assert_eq!(emitted, vec![[bnode("s"), iri(P), bnode("o")]]);
}

#[test]
fn resource_form_several_subjects_and_predicates() {
    let mut events = vec![StartMap];
    for subject in ["http://example.org/s1", "_:s2"] {
        events.extend([MapKey(subject), StartMap]);
        for predicate in ["http://example.org/p1", "http://example.org/p2"] {
            events.extend([MapKey(predicate), StartArray]);
            events.extend(term("v", "literal"));
            events.push(EndArray);
        }
        events.push(EndMap);
    }
    events.extend([EndMap, End]);
    let got = parse(&events).unwrap();
    let sp: Vec<String> = got.iter().map(|t| format!("{} {}", t[0], t[1])).collect();
    assert_eq!(
        sp,
        [
            "<http://example.org/s1> <http://example.org/p1>",
            "<http://example.org/s1> <http://example.org/p2>",
            "_:s2 <http://example.org/p1>",
            "_:s2 <http://example.org/p2>",
        ]
    );
}

#[test]
fn both_forms_in_one_document() {
    let mut events = vec![StartMap, MapKey(S), StartMap, MapKey(P), StartArray];
    events.extend(term("a", "literal"));
    events.extend([EndArray, EndMap, MapKey("triples"), StartArray]);
    events.extend(triple(vec![
        ("subject", term(S, "uri")),
        ("predicate", term(P, "uri")),
        ("object", term("b", "literal")),
    ]));
    events.extend([EndArray, EndMap, End]);
    assert_eq!(
        parse(&events).unwrap(),
        vec![[iri(S), iri(P), lit("a")], [iri(S), iri(P), lit("b")]]
    );
}

#[test_case(vec![] ; "root")]
#[test_case(vec![StartMap] ; "map root")]
#[test_case(vec![StartMap, MapKey("triples")] ; "triples key")]
#[test_case(vec![StartMap, MapKey("triples"), StartArray] ; "triples array")]
#[test_case(vec![StartMap, MapKey("triples"), StartArray, StartMap, MapKey("subject")] ; "triple")]
#[test_case(vec![StartMap, MapKey("triples"), StartArray, StartMap, MapKey("subject"), StartMap, MapKey("value")] ; "triple term")]
#[test_case(vec![StartMap, MapKey(S)] ; "subject key")]
#[test_case(vec![StartMap, MapKey(S), StartMap, MapKey(P)] ; "predicate")]
#[test_case(vec![StartMap, MapKey(S), StartMap, MapKey(P), StartArray] ; "object array")]
#[test_case(vec![StartMap, MapKey(S), StartMap, MapKey(P), StartArray, StartMap, MapKey("value")] ; "object")]
fn scalars_always_rejected(prefix: Vec<JsonEvent>) {
    for (scalar, kind) in [
        (JsonEvent::Null, ScalarKind::Null),
        (JsonEvent::Boolean(false), ScalarKind::Boolean),
        (JsonEvent::Number("12"), ScalarKind::Integer),
        (JsonEvent::Number("1.5"), ScalarKind::Float),
    ] {
        let mut h = RdfJsonHandler::default();
        feed(&mut h, &prefix).unwrap();
        let err = feed(&mut h, &[scalar]).unwrap_err();
        assert!(matches!(err, RdfJsonError::BareScalar(k) if k == kind));
        assert!(h.is_halted());
    }
}

#[test_case(vec![StartArray] ; "array as root")]
#[test_case(vec![text("x")] ; "string as root")]
#[test_case(vec![StartMap, text("x")] ; "string in map root")]
#[test_case(vec![StartMap, StartArray] ; "array in map root")]
#[test_case(vec![StartMap, MapKey("triples"), StartMap] ; "map instead of triples array")]
#[test_case(vec![StartMap, MapKey("triples"), StartArray, text("x")] ; "string in triples array")]
#[test_case(vec![StartMap, MapKey("triples"), StartArray, StartMap, text("x")] ; "string in triple")]
#[test_case(vec![StartMap, MapKey("triples"), StartArray, StartMap, StartArray] ; "array in triple")]
#[test_case(vec![StartMap, MapKey(S), StartArray] ; "array instead of predicate map")]
#[test_case(vec![StartMap, MapKey(S), StartMap, text("x")] ; "string in predicate map")]
#[test_case(vec![StartMap, MapKey(S), StartMap, MapKey(P), StartMap] ; "map instead of object array")]
#[test_case(vec![StartMap, MapKey(S), StartMap, MapKey(P), StartArray, text("x")] ; "string in object array")]
#[test_case(vec![StartMap, MapKey(S), StartMap, MapKey(P), StartArray, StartMap, StartMap] ; "nested term map")]
fn structural_errors(events: Vec<JsonEvent>) {
    let mut h = RdfJsonHandler::default();
    let err = feed(&mut h, &events).unwrap_err();
    assert!(matches!(err, RdfJsonError::UnexpectedEvent { .. }), "{err}");
    assert!(h.is_halted());
}

#[test]
fn unexpected_event_message() {
    let err = parse(&[StartMap, text("x")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected string: expected 'triples' key, subject key or end of map"
    );
}

#[test]
fn halted_handler_rejects_everything() {
    let mut h = RdfJsonHandler::default();
    assert!(feed(&mut h, &[JsonEvent::Null]).is_err());
    assert!(matches!(
        feed(&mut h, &[StartMap]),
        Err(RdfJsonError::Aborted)
    ));
    assert!(matches!(feed(&mut h, &[End]), Err(RdfJsonError::Aborted)));
    h.reset();
    assert!(!h.is_halted());
    assert!(feed(&mut h, &[StartMap, EndMap, End]).unwrap().is_empty());
}

#[test]
fn unexpected_triple_key_is_fatal() {
    let events = [
        StartMap,
        MapKey("triples"),
        StartArray,
        StartMap,
        MapKey("graph"),
    ];
    let mut h = RdfJsonHandler::default();
    let err = feed(&mut h, &events).unwrap_err();
    assert!(matches!(err, RdfJsonError::UnexpectedTripleKey(k) if k == "graph"));
    assert!(h.is_halted());
}

#[test]
fn unexpected_term_key_is_fatal() {
    let events = [
        StartMap,
        MapKey(S),
        StartMap,
        MapKey(P),
        StartArray,
        StartMap,
        MapKey("language"),
    ];
    let err = parse(&events).unwrap_err();
    assert!(matches!(err, RdfJsonError::UnexpectedTermKey(k) if k == "language"));
}

#[test]
fn invalid_subject_key_is_fatal() {
    let err = parse(&[StartMap, MapKey("not an iri")]).unwrap_err();
    assert!(matches!(err, RdfJsonError::InvalidTerm(_)));
}

#[test]
fn invalid_predicate_key_is_fatal() {
    let err = parse(&[StartMap, MapKey(S), StartMap, MapKey("a b")]).unwrap_err();
    assert!(matches!(err, RdfJsonError::InvalidTerm(_)));
}

#[test]
fn term_without_value_is_fatal() {
    let events = [
        StartMap,
        MapKey(S),
        StartMap,
        MapKey(P),
        StartArray,
        StartMap,
        MapKey("type"),
        text("uri"),
        EndMap,
    ];
    let mut h = RdfJsonHandler::default();
    assert!(matches!(
        feed(&mut h, &events),
        Err(RdfJsonError::MissingValue)
    ));
    assert!(h.is_halted());
}

#[test]
fn missing_slot_drops_triple() {
    let events = triples_doc(vec![
        triple(vec![
            ("subject", term(S, "uri")),
            ("predicate", term(P, "uri")),
        ]),
        triple(vec![
            ("subject", term(S, "uri")),
            ("predicate", term(P, "uri")),
            ("object", term("ok", "literal")),
        ]),
    ]);
    let mut h = RdfJsonHandler::default();
    assert_eq!(
        feed(&mut h, &events).unwrap(),
        vec![[iri(S), iri(P), lit("ok")]]
    );
    assert_eq!(h.warnings().len(), 1);
    assert!(matches!(
        h.warnings()[0],
        RdfJsonError::MissingTerm(Slot::Object)
    ));
    assert_eq!(
        h.warnings()[0].to_string(),
        "Triple is missing its object term"
    );
}

#[test]
fn missing_slot_reports_first_missing() {
    let events = triples_doc(vec![triple(vec![("object", term("o", "literal"))])]);
    let mut h = RdfJsonHandler::default();
    assert!(feed(&mut h, &events).unwrap().is_empty());
    assert!(matches!(
        h.warnings(),
        [RdfJsonError::MissingTerm(Slot::Subject)]
    ));
}

#[test]
fn terms_do_not_leak_between_triples() {
    let events = triples_doc(vec![
        triple(vec![
            ("subject", term(S, "uri")),
            ("predicate", term(P, "uri")),
            ("object", term("a", "literal")),
        ]),
        triple(vec![("object", term("b", "literal"))]),
    ]);
    let mut h = RdfJsonHandler::default();
    assert_eq!(feed(&mut h, &events).unwrap().len(), 1);
    assert!(matches!(
        h.warnings(),
        [RdfJsonError::MissingTerm(Slot::Subject)]
    ));
}

#[test]
fn strict_mode_makes_missing_slot_fatal() {
    let events = triples_doc(vec![triple(vec![("subject", term(S, "uri"))])]);
    let mut h = RdfJsonHandler::new(RdfJsonOptions::new().with_strict(true));
    assert!(matches!(
        feed(&mut h, &events),
        Err(RdfJsonError::MissingTerm(Slot::Predicate))
    ));
    assert!(h.is_halted());
    assert!(h.warnings().is_empty());
}

#[test]
fn later_slot_replaces_earlier() {
    let events = triples_doc(vec![triple(vec![
        ("subject", term("http://example.org/first", "uri")),
        ("predicate", term(P, "uri")),
        ("object", term("o", "literal")),
        ("subject", term("http://example.org/second", "uri")),
    ])]);
    assert_eq!(
        parse(&events).unwrap(),
        vec![[iri("http://example.org/second"), iri(P), lit("o")]]
    );
}

#[test]
fn term_without_slot_is_dropped() {
    let mut events = vec![StartMap, MapKey("triples"), StartArray, StartMap];
    events.extend(term("lost", "literal"));
    events.push(MapKey("subject"));
    events.extend(term(S, "uri"));
    events.push(MapKey("predicate"));
    events.extend(term(P, "uri"));
    events.push(MapKey("object"));
    events.extend(term("kept", "literal"));
    events.extend([EndMap, EndArray, EndMap, End]);
    let mut h = RdfJsonHandler::default();
    assert_eq!(
        feed(&mut h, &events).unwrap(),
        vec![[iri(S), iri(P), lit("kept")]]
    );
    assert!(matches!(h.warnings(), [RdfJsonError::UnassignedTerm]));
}

#[test]
fn unknown_type_is_a_warning() {
    let mut events = vec![StartMap, MapKey(S), StartMap, MapKey(P), StartArray];
    events.extend(term("_:b", "resource"));
    events.extend([EndArray, EndMap, EndMap, End]);
    let mut h = RdfJsonHandler::default();
    assert_eq!(
        feed(&mut h, &events).unwrap(),
        vec![[iri(S), iri(P), bnode("b")]]
    );
    assert!(matches!(
        h.warnings(),
        [RdfJsonError::UnknownTermType(t)] if t == "resource"
    ));
}

#[test]
fn unknown_type_then_unsupported() {
    let mut events = vec![StartMap, MapKey(S), StartMap, MapKey(P), StartArray];
    events.extend(term("x", "resource"));
    let mut h = RdfJsonHandler::default();
    assert!(matches!(
        feed(&mut h, &events),
        Err(RdfJsonError::UnsupportedTermType)
    ));
    assert_eq!(h.warnings().len(), 1);
}

#[test]
fn literal_with_language_and_datatype() {
    let events = [
        StartMap,
        MapKey(S),
        StartMap,
        MapKey(P),
        StartArray,
        StartMap,
        MapKey("lang"),
        text("en"),
        MapKey("value"),
        text("hello"),
        MapKey("type"),
        text("literal"),
        EndMap,
        StartMap,
        MapKey("value"),
        text("1"),
        MapKey("datatype"),
        text("http://www.w3.org/2001/XMLSchema#integer"),
        MapKey("type"),
        text("literal"),
        EndMap,
        EndArray,
        EndMap,
        EndMap,
        End,
    ];
    let got = parse(&events).unwrap();
    assert_eq!(
        got[0][2],
        SimpleTerm::new_literal("hello", Some("en"), None).unwrap()
    );
    assert_eq!(
        got[1][2],
        SimpleTerm::new_literal("1", None, Some("http://www.w3.org/2001/XMLSchema#integer"))
            .unwrap()
    );
}

#[test]
fn end_discards_partial_statement() {
    let mut events = vec![StartMap, MapKey("triples"), StartArray, StartMap];
    events.push(MapKey("subject"));
    events.extend(term(S, "uri"));
    events.push(MapKey("predicate"));
    events.extend(term(P, "uri"));
    events.push(MapKey("object"));
    events.extend(term("o", "literal"));
    events.push(End);
    let mut h = RdfJsonHandler::default();
    assert!(feed(&mut h, &events).unwrap().is_empty());
    assert_eq!(h.state(), ParseState::Root);
    assert!(h.warnings().is_empty());
    // nothing survives into the next document
    let next = triples_doc(vec![triple(vec![("object", term("o", "literal"))])]);
    assert!(feed(&mut h, &next).unwrap().is_empty());
    assert!(matches!(
        h.warnings(),
        [RdfJsonError::MissingTerm(Slot::Subject)]
    ));
}

#[derive(Debug, thiserror::Error)]
#[error("sink is full")]
struct Full;

#[test]
fn sink_error_halts() {
    let mut events = vec![StartMap, MapKey(S), StartMap, MapKey(P), StartArray];
    events.extend(term("a", "literal"));
    events.extend(term("b", "literal"));
    let mut h = RdfJsonHandler::default();
    let mut calls = 0;
    let mut result = Ok(());
    for event in events {
        result = h.handle(event, &mut |_: [&SimpleTerm; 3]| {
            calls += 1;
            Err(Full)
        });
        if result.is_err() {
            break;
        }
    }
    assert!(result.unwrap_err().is_sink_error());
    assert_eq!(calls, 1);
    assert!(h.is_halted());
}

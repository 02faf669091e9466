//! Parse an RDF/JSON document from the standard input,
//! and write it back in [N-Triples] to the standard output.
//!
//! Alternatively, the input file name can be provided as the first argument.
//!
//! Setting the environment variable `RDFJSON_STRICT` (to anything but `0`)
//! makes recoverable errors fatal.
//! Warnings and diagnostics are logged through `env_logger` (see `RUST_LOG`).
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/

use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rdfjson::parser::RdfJsonParser;
use rdfjson::syntax::recognise_syntax;
use rdfjson::RdfJsonOptions;
use rdfjson_api::prelude::*;
use rdfjson_api::source::StreamError::{SinkError, SourceError};

fn main() {
    env_logger::init();
    let path = std::env::args().nth(1);
    let strict = std::env::var("RDFJSON_STRICT").is_ok_and(|v| v != "0");
    let parser = RdfJsonParser::new_with_options(RdfJsonOptions::new().with_strict(strict));

    let res = match &path {
        Some(path) => match File::open(path) {
            Ok(file) => {
                let mut input = BufReader::new(file);
                log_score(&mut input, path);
                dump(parser.parse(input))
            }
            Err(err) => {
                eprintln!("Cannot open {path}: {err}");
                std::process::exit(-2);
            }
        },
        None => dump(parser.parse(stdin().lock())),
    };
    if let Err(msg) = res {
        eprintln!("{msg}");
        std::process::exit(1);
    }
}

fn log_score<B: BufRead>(input: &mut B, path: &str) {
    let suffix = Path::new(path).extension().and_then(|ext| ext.to_str());
    let head = input.fill_buf().unwrap_or_default();
    let score = recognise_syntax(head, Some(path), suffix, None);
    log::debug!("{path} scores {score} as RDF/JSON");
}

fn dump<S: TripleSource>(mut triples: S) -> Result<(), String> {
    let mut out = BufWriter::new(stdout());
    let res = triples.try_for_each_triple(|t| {
        let [s, p, o] = t.to_simple();
        writeln!(out, "{s} {p} {o} .")
    });
    match res {
        Ok(()) => out.flush().map_err(|err| format!("Error writing triples: {err}")),
        Err(SourceError(err)) => Err(format!("Error parsing input: {err}")),
        Err(SinkError(err)) => Err(format!("Error writing triples: {err}")),
    }
}

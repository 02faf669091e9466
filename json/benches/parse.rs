use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rdfjson_api::source::TripleSource;

fn resource_map(n: usize) -> String {
    let subjects: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#""http://example.org/s{i}": {{
                    "http://example.org/name": [{{"value": "Person {i}", "type": "literal", "lang": "en"}}],
                    "http://example.org/age": [{{"value": "{i}", "type": "literal", "datatype": "http://www.w3.org/2001/XMLSchema#integer"}}],
                    "http://example.org/knows": [{{"value": "_:b{i}", "type": "bnode"}}, {{"value": "http://example.org/s0", "type": "uri"}}]
                }}"#
            )
        })
        .collect();
    format!("{{{}}}", subjects.join(",\n"))
}

fn triples_array(n: usize) -> String {
    let triples: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"subject": {{"value": "http://example.org/s{i}", "type": "uri"}},
                    "predicate": {{"value": "http://example.org/name", "type": "uri"}},
                    "object": {{"value": "Person {i}", "type": "literal"}}}}"#
            )
        })
        .collect();
    format!(r#"{{"triples": [{}]}}"#, triples.join(",\n"))
}

fn parse(c: &mut Criterion) {
    for (name, data) in [
        ("parse resource map", resource_map(1000)),
        ("parse triples array", triples_array(1000)),
    ] {
        let mut group = c.benchmark_group(name);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(name, &data, |b, data| {
            let mut count = 0;
            b.iter(|| rdfjson::parser::parse_str(data).for_each_triple(|_| count += 1))
        });
        group.finish();
    }
}

criterion_group!(benches, parse);
criterion_main!(benches);

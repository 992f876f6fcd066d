use criterion::{Criterion, criterion_group, criterion_main};
use jsontidy::{Options, format_to_string};

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let cases = vec![
        ("strict", r#"{"a": 1, "b": [1, 2, 3]}"#),
        ("python", "{'ok': True, 'data': None, 'items': [1, 2, 3,],}"),
        (
            "comments",
            "// note\n{\"a\": 1, /* b */ \"b\": 2, # tail\n}",
        ),
        ("mixed_text", "Answer: {'x': 1, 'y': (2, 3)} done"),
        ("escaped", r#"[{\"t\": 1}, {\"t\": 2}]"#),
        ("prose", "nothing to format in this sentence"),
    ];
    let opts = Options::default();
    for (name, s) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let out = format_to_string(std::hint::black_box(s), &opts).unwrap();
                std::hint::black_box(out);
            })
        });
    }
    group.finish();
}

fn bench_format_large(c: &mut Criterion) {
    let mut doc = String::from("{");
    for i in 0..200usize {
        if i > 0 {
            doc.push_str(", ");
        }
        doc.push_str(&format!(
            "'k{}': {{'id': {}, 'flag': True, 'tags': ['a', 'b',]}}",
            i, i
        ));
    }
    doc.push('}');

    let opts = Options::default();
    c.bench_function("format/large_python_doc", |b| {
        b.iter(|| {
            let out = format_to_string(std::hint::black_box(doc.as_str()), &opts).unwrap();
            std::hint::black_box(out);
        })
    });
}

criterion_group!(benches, bench_format, bench_format_large);
criterion_main!(benches);

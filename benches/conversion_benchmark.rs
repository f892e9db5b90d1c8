use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Cursor;
use ukoa_converter::readers::{RecordLayout, UkoaReader};
use ukoa_converter::utils::coordinates::ukoa_to_decimal;
use ukoa_converter::writers::DelimitedWriter;

fn create_survey(lines: usize) -> String {
    (0..lines)
        .map(|shot| {
            format!(
                "RAE52-01          {:>5}645929.40S 655311.90E\n",
                shot
            )
        })
        .collect()
}

fn benchmark_coordinate_parsing(c: &mut Criterion) {
    c.bench_function("ukoa_to_decimal", |b| {
        b.iter(|| ukoa_to_decimal(black_box("0645929.40S")).unwrap())
    });
}

fn benchmark_line_parsing(c: &mut Criterion) {
    let line = "RAE52-01               0645929.40S 655311.90E";
    let mut group = c.benchmark_group("parse_line");

    for layout in [RecordLayout::FixedOffset, RecordLayout::WhitespaceSplit] {
        let reader = UkoaReader::with_layout(layout);
        group.bench_function(layout.to_string(), |b| {
            b.iter(|| reader.parse_line(black_box(line), 1).unwrap())
        });
    }

    group.finish();
}

fn benchmark_stream_conversion(c: &mut Criterion) {
    let survey = create_survey(10_000);
    let reader = UkoaReader::new();

    c.bench_function("convert_10k_lines", |b| {
        b.iter(|| {
            let mut writer = DelimitedWriter::new(Vec::with_capacity(survey.len()), "\t");
            for record in reader.records_from(Cursor::new(survey.as_bytes())) {
                writer.write_record(&record.unwrap()).unwrap();
            }
            black_box(writer.into_inner().unwrap())
        })
    });
}

criterion_group!(
    benches,
    benchmark_coordinate_parsing,
    benchmark_line_parsing,
    benchmark_stream_conversion
);
criterion_main!(benches);

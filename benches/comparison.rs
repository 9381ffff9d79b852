use criterion::{Criterion, black_box, criterion_group, criterion_main};

use compare_files::comparison::{ComparePolicy, compare};
use compare_files::loader::cells::default_null_tokens;
use compare_files::loader::csv::load_csv_from_bytes;
use compare_files::types::{Column, Table, Value};

fn synthetic_table(rows: usize, measure_cols: usize, shift: i64) -> Table {
    let mut columns = vec![Column::new(
        "RecordID",
        (0..rows as i64).map(Value::Int64).collect(),
    )];
    for c in 0..measure_cols {
        let values = (0..rows as i64)
            .map(|r| match (r + c as i64) % 17 {
                0 => Value::Null,
                1 => Value::Utf8("n/a".to_string()),
                2 => Value::Utf8(format!("{}.25", r + shift)),
                _ => Value::Float64((r + shift) as f64 * 0.5),
            })
            .collect();
        columns.push(Column::new(format!("measure_{c}"), values));
    }
    Table::new(columns)
}

fn synthetic_csv(rows: usize) -> Vec<u8> {
    let mut out = String::from("ID,Amount,Region,Note\n");
    for r in 0..rows {
        out.push_str(&format!("{r},{}.5,North,NA\n", r * 3));
    }
    out.into_bytes()
}

fn bench_compare(c: &mut Criterion) {
    let left = synthetic_table(5_000, 24, 0);
    let right = synthetic_table(5_000, 24, 1);
    let policy = ComparePolicy::default();

    c.bench_function("compare_5k_rows_25_cols", |b| {
        b.iter(|| compare(black_box(&left), black_box(&right), &policy))
    });
}

fn bench_load_csv(c: &mut Criterion) {
    let bytes = synthetic_csv(10_000);
    let nulls = default_null_tokens();

    c.bench_function("load_csv_10k_rows", |b| {
        b.iter(|| load_csv_from_bytes(black_box(&bytes), b',', &nulls).unwrap())
    });
}

criterion_group!(benches, bench_compare, bench_load_csv);
criterion_main!(benches);

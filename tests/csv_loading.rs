use compare_files::LoadError;
use compare_files::loader::cells::default_null_tokens;
use compare_files::loader::csv::{load_csv_from_path, load_csv_from_reader};
use compare_files::types::Value;

fn reader(input: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes())
}

#[test]
fn load_csv_from_path_happy_path() {
    let t = load_csv_from_path("tests/fixtures/ledger_left.csv", b',', &default_null_tokens()).unwrap();

    assert_eq!(t.row_count(), 3);
    assert_eq!(t.column_names().collect::<Vec<_>>(), vec!["ID", "Amount", "Region", "Extra"]);
    assert_eq!(
        t.column("Amount").unwrap().values,
        vec![Value::Float64(10.5), Value::Int64(20), Value::Null]
    );
    assert_eq!(t.column("Region").unwrap().values[0], Value::Utf8("North".to_string()));
}

#[test]
fn load_csv_maps_null_markers_to_null() {
    let mut rdr = reader("id,amount\n1,NA\n2,N/A\n3, \n4,#N/A\n5,7\n");
    let t = load_csv_from_reader(&mut rdr, &default_null_tokens()).unwrap();
    assert_eq!(t.column("amount").unwrap().non_null_count(), 1);
}

#[test]
fn load_csv_renames_duplicate_and_blank_headers() {
    let mut rdr = reader("amount,amount,,id\n1,2,3,4\n");
    let t = load_csv_from_reader(&mut rdr, &default_null_tokens()).unwrap();
    assert_eq!(
        t.column_names().collect::<Vec<_>>(),
        vec!["amount", "amount.1", "Unnamed: 2", "id"]
    );
    assert_eq!(t.column("amount.1").unwrap().values, vec![Value::Int64(2)]);
}

#[test]
fn load_csv_pads_short_rows() {
    let mut rdr = reader("a,b,c\n1,2\n");
    let t = load_csv_from_reader(&mut rdr, &default_null_tokens()).unwrap();
    assert_eq!(t.column("c").unwrap().values, vec![Value::Null]);
}

#[test]
fn load_csv_errors_on_overlong_row() {
    let mut rdr = reader("a,b\n1,2\n1,2,3\n");
    let err = load_csv_from_reader(&mut rdr, &default_null_tokens()).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }));
    assert!(err.to_string().contains("row 3 has 3 fields but the header has 2"));
}

#[test]
fn load_csv_keeps_text_and_bools() {
    let mut rdr = reader("flag,name\nTrue,Ada\nfalse,Grace\n");
    let t = load_csv_from_reader(&mut rdr, &default_null_tokens()).unwrap();
    assert_eq!(t.column("flag").unwrap().values, vec![Value::Bool(true), Value::Bool(false)]);
    assert_eq!(t.column("name").unwrap().values[1], Value::Utf8("Grace".to_string()));
}

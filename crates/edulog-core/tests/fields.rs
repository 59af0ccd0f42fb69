use edulog_core::fields::{first_text, number, optional_number, text};
use serde_json::json;

#[test]
fn numbers_and_numeric_strings_coerce() {
    assert_eq!(number(&json!(7)), 7.0);
    assert_eq!(number(&json!(2.5)), 2.5);
    assert_eq!(number(&json!(" 4 ")), 4.0);
}

#[test]
fn non_numeric_values_coerce_to_zero() {
    for value in [json!(null), json!(""), json!("abc"), json!(true), json!([1]), json!({})] {
        assert_eq!(number(&value), 0.0, "{value}");
        assert_eq!(optional_number(&value), None, "{value}");
    }
}

#[test]
fn text_formats_scalars_and_drops_containers() {
    assert_eq!(text(&json!("  Anna ")), "Anna");
    assert_eq!(text(&json!(12)), "12");
    assert_eq!(text(&json!(null)), "");
    assert_eq!(text(&json!({"a": 1})), "");
}

#[test]
fn first_text_skips_empty_aliases() {
    let map = json!({"vorname": "", "first_name": "Mia"});
    let map = map.as_object().unwrap();
    assert_eq!(first_text(map, &["vorname", "first_name"]), "Mia");
    assert_eq!(first_text(map, &["missing"]), "");
}

use std::collections::BTreeSet;

use edulog_core::models::record::{BasicRecord, RawTestResult};
use edulog_core::models::session::{Session, SessionEnvelope};
use edulog_core::models::view_model::ViewModel;
use edulog_scoring::assemble::{assemble, fallback};
use edulog_scoring::colorize::{FAIL_COLOR, PASS_COLOR};
use edulog_scoring::{all_categories, get_category};
use jiff::civil::date;
use serde_json::{json, Value};

fn thresholds_for(category: &str) -> Value {
    let bands = [
        (1, 0, 2, "sehr auffällig"),
        (2, 3, 4, "auffällig"),
        (3, 5, 6, "grenzwertig"),
        (4, 7, 8, "auffällig"),
        (5, 9, 10, "gut"),
        (6, 11, 13, "sehr gut"),
    ];
    Value::Array(
        bands
            .iter()
            .map(|(level, min, max, text)| {
                json!({
                    "kategorie": category,
                    "stufe": level,
                    "min": min,
                    "max": max,
                    "beschreibung": text,
                })
            })
            .collect(),
    )
}

fn session_with(thresholds: Value) -> Session {
    serde_json::from_value::<SessionEnvelope>(json!({
        "data": {
            "einrichtung": {"id": 12, "name": "Kita Regenbogen", "ort": "München"},
            "parameters": {
                "colors": [{"color": "#d32f2f"}, {"color": "#f57c00"}, {"color": "#fbc02d"},
                           {"color": "#afb42b"}, {"color": "#689f38"}, {"color": "#388e3c"}],
                "edulog_thresholds": thresholds,
            }
        }
    }))
    .unwrap()
    .data
}

fn basic() -> BasicRecord {
    BasicRecord::from_response(json!({
        "vorname": "Jonas",
        "nachname": "Becker",
        "geburtsdatum": "15/03/2018",
        "sprache": "Deutsch",
        "seit": "01.08.2021",
        "datum": "01.06.2024",
        "paedagoge": "Frau Klein",
    }))
    .unwrap()
}

fn keys(vm: &ViewModel) -> BTreeSet<String> {
    match serde_json::to_value(vm).unwrap() {
        Value::Object(map) => map.keys().cloned().collect(),
        other => panic!("view-model did not serialize to an object: {other}"),
    }
}

#[test]
fn score_in_level_four_band_yields_its_assessment() {
    let category = get_category("feinmotorik").unwrap();
    let session = session_with(thresholds_for("Feinmotorik"));
    let result = RawTestResult::from_response(
        &json!({"feinmotorik": {"fm_score": 7, "items": [{"stifthaltung": true, "schneiden": false}]}}),
        category.result_key,
    )
    .unwrap();

    let vm = assemble(category, &basic(), &session, Some(&result), date(2024, 6, 1));
    let common = vm.common();

    assert_eq!(common.assessment, "auffällig");
    assert_eq!(common.min, 0.0);
    assert_eq!(common.max, 13.0);
    assert_eq!(common.score, 7.0);
    assert_eq!(common.ranges.len(), 6);
    assert_eq!(common.colors[0], "#d32f2f");
    assert_eq!(common.name, "Jonas Becker");
    assert_eq!(common.age, "6,2");
    assert_eq!(common.company, "Kita Regenbogen");
    assert_eq!(common.location, "München");
    assert_eq!(common.teacher, "Frau Klein");

    let items = vm.items().unwrap();
    assert_eq!(items["stifthaltung"], PASS_COLOR);
    assert_eq!(items["schneiden"], FAIL_COLOR);
    assert_eq!(items["falten"], "");
}

#[test]
fn unsorted_overlapping_bands_resolve_to_the_lowest_level() {
    let category = get_category("feinmotorik").unwrap();
    let rows = [
        (6, 11, 13, "sehr gut"),
        (3, 4, 6, "grenzwertig"),
        (1, 0, 2, "sehr auffällig"),
        (5, 9, 10, "gut"),
        (2, 3, 5, "auffällig"),
        (4, 7, 8, "unauffällig"),
    ];
    let thresholds = Value::Array(
        rows.iter()
            .map(|(level, min, max, text)| {
                json!({"kategorie": "Feinmotorik", "stufe": level, "min": min, "max": max, "beschreibung": text})
            })
            .collect(),
    );
    let session = session_with(thresholds);
    let result = RawTestResult::from_response(&json!({"feinmotorik": {"fm_score": 5}}), category.result_key);

    let vm = assemble(category, &basic(), &session, result.as_ref(), date(2024, 6, 1));
    let common = vm.common();

    assert_eq!(common.assessment, "auffällig");
    assert_eq!(common.min, 0.0);
    assert_eq!(common.max, 13.0);
    assert_eq!(common.ranges[1].start, 3.0);
    assert_eq!(common.ranges[2].start, 4.0);
}

#[test]
fn thresholds_of_other_categories_leave_the_default_scale() {
    let category = get_category("feinmotorik").unwrap();
    let session = session_with(thresholds_for("Grobmotorik"));
    let result = RawTestResult::from_response(&json!({"feinmotorik": {"fm_score": 7}}), "feinmotorik");

    let vm = assemble(category, &basic(), &session, result.as_ref(), date(2024, 6, 1));
    let common = vm.common();

    assert_eq!(common.min, 0.0);
    assert_eq!(common.max, 13.0);
    assert!(common.colors.is_empty());
    assert!(common.ranges.is_empty());
    assert_eq!(common.assessment, "");
    assert_eq!(common.score, 7.0);
}

#[test]
fn missing_result_keeps_score_and_assessment_empty() {
    let category = get_category("grobmotorik").unwrap();
    let session = session_with(thresholds_for("Grobmotorik"));

    let vm = assemble(category, &basic(), &session, None, date(2024, 6, 1));

    assert_eq!(vm.common().score, 0.0);
    assert_eq!(vm.common().assessment, "");
    assert_eq!(vm.common().ranges.len(), 6);
    let ViewModel::Motor(motor) = vm else {
        panic!("grobmotorik must assemble a motor view-model");
    };
    assert_eq!(motor.balance_seconds, 0.0);
    assert_eq!(motor.jump_count, 0.0);
}

#[test]
fn category_extras_are_read_from_the_result() {
    let motor = get_category("grobmotorik").unwrap();
    let result = RawTestResult::from_response(
        &json!({"grobmotorik": {"gm_score": "5", "balancieren_sekunden": "12.5", "hueftspruenge": 8}}),
        motor.result_key,
    );
    let vm = assemble(motor, &basic(), &Session::default(), result.as_ref(), date(2024, 6, 1));
    let ViewModel::Motor(vm) = vm else {
        panic!("expected motor view-model");
    };
    assert_eq!(vm.common.score, 5.0);
    assert_eq!(vm.balance_seconds, 12.5);
    assert_eq!(vm.jump_count, 8.0);

    let observation = get_category("sozial_emotional").unwrap();
    let result = RawTestResult::from_response(
        &json!({"sozial_emotional": {"se_score": 4, "beobachter": "Herr Roth", "situation": "Freispiel"}}),
        observation.result_key,
    );
    let vm = assemble(observation, &basic(), &Session::default(), result.as_ref(), date(2024, 6, 1));
    let ViewModel::Observation(vm) = vm else {
        panic!("expected observation view-model");
    };
    assert_eq!(vm.observer, "Herr Roth");
    assert_eq!(vm.setting, "Freispiel");
}

#[test]
fn assembled_and_fallback_records_share_keys_for_every_category() {
    for category in all_categories() {
        let session = session_with(thresholds_for(category.label));
        let result = RawTestResult::from_response(
            &json!({ (category.result_key): { (category.score_field): 3, "items": [{}] } }),
            category.result_key,
        );

        let assembled = assemble(category, &basic(), &session, result.as_ref(), date(2024, 6, 1));
        let empty = fallback(category);

        assert_eq!(keys(&assembled), keys(&empty), "category {}", category.id);
        assert_eq!(
            assembled.items().map(|i| i.keys().collect::<Vec<_>>()),
            empty.items().map(|i| i.keys().collect::<Vec<_>>()),
            "grid keys of {}",
            category.id
        );
    }
}

#[test]
fn fallback_is_empty_but_complete() {
    let vm = fallback(get_category("sprachverstaendnis").unwrap());
    let value = serde_json::to_value(&vm).unwrap();

    assert_eq!(value["name"], "");
    assert_eq!(value["score"], 0.0);
    assert_eq!(value["min"], 0.0);
    assert_eq!(value["max"], 13.0);
    assert_eq!(value["colors"], json!([]));
    assert_eq!(value["label_1"], "Label 1");
    assert_eq!(value["sub_split"], "TBD");
    assert_eq!(value["items"]["w_fragen"], "");
}

#[test]
fn category_ids_are_unique() {
    let ids: BTreeSet<_> = all_categories().iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), all_categories().len());
    assert!(get_category("unknown").is_none());
}

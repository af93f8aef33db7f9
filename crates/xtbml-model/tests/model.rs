//! Tests for xtbml-model serialization.

use serde_json::json;
use xtbml_model::{
    AxisDefinition, Classification, ClassifiedValue, ConvertedDocument, RateEntry, TableMeta,
    TablePayload,
};

fn sample_document() -> ConvertedDocument {
    ConvertedDocument {
        identifier: "sample_table".to_string(),
        version: "1.0".to_string(),
        classification: Some(Classification {
            table_identity: "42".to_string(),
            table_name: "Sample Table".to_string(),
            content_type: ClassifiedValue::new("85", "CSO / CET"),
            keywords: vec!["Aggregate".to_string()],
            ..Classification::default()
        }),
        tables: vec![TablePayload {
            index: 0,
            metadata: Some(TableMeta {
                scaling_factor: "0".to_string(),
                axes: vec![AxisDefinition {
                    id: "Age".to_string(),
                    scale_type: ClassifiedValue::new("1", "Age"),
                    ..AxisDefinition::default()
                }],
                ..TableMeta::default()
            }),
            rates: vec![
                RateEntry {
                    age: 40,
                    duration: None,
                    rate: Some(0.01),
                },
                RateEntry {
                    age: 41,
                    duration: None,
                    rate: None,
                },
            ],
        }],
    }
}

#[test]
fn classification_uses_camel_case_keys() {
    let value = serde_json::to_value(sample_document()).expect("serialize document");
    let class = &value["classification"];
    assert_eq!(class["tableIdentity"], "42");
    assert_eq!(class["tableName"], "Sample Table");
    assert_eq!(class["contentType"], json!({"code": "85", "label": "CSO / CET"}));
    assert_eq!(class["keywords"], json!(["Aggregate"]));
    assert!(class.get("table_name").is_none());
}

#[test]
fn document_fields_keep_declared_order() {
    let json = serde_json::to_string(&sample_document()).expect("serialize document");
    let identifier = json.find("\"identifier\"").expect("identifier key");
    let version = json.find("\"version\"").expect("version key");
    let classification = json.find("\"classification\"").expect("classification key");
    let tables = json.find("\"tables\"").expect("tables key");
    assert!(identifier < version && version < classification && classification < tables);
}

#[test]
fn rate_entries_omit_missing_duration_but_keep_null_rate() {
    let value = serde_json::to_value(sample_document()).expect("serialize document");
    let rates = &value["tables"][0]["rates"];
    assert_eq!(rates[0], json!({"age": 40, "rate": 0.01}));
    assert_eq!(rates[1], json!({"age": 41, "rate": null}));
}

#[test]
fn table_without_rates_omits_rates_key() {
    let table = TablePayload {
        index: 3,
        metadata: Some(TableMeta::default()),
        rates: vec![],
    };
    let value = serde_json::to_value(&table).expect("serialize table");
    assert_eq!(value["index"], 3);
    assert!(value.get("rates").is_none());
    assert_eq!(value["metadata"]["axes"], json!([]));
}

#[test]
fn document_round_trips() {
    let document = sample_document();
    let json = serde_json::to_string_pretty(&document).expect("serialize document");
    let round: ConvertedDocument = serde_json::from_str(&json).expect("deserialize document");
    assert_eq!(round, document);
    assert_eq!(round.table_name(), "Sample Table");
    assert_eq!(round.rate_count(), 2);
}

#[test]
fn missing_fields_default_on_read() {
    let round: ConvertedDocument =
        serde_json::from_str(r#"{"identifier": "x", "tables": [{"index": 1}]}"#)
            .expect("deserialize partial document");
    assert_eq!(round.version, "");
    assert!(round.classification.is_none());
    assert_eq!(round.tables[0].index, 1);
    assert!(round.tables[0].rates.is_empty());
    assert_eq!(round.table_name(), "");
}

use pretty_assertions::assert_eq;
use serde_json::json;
use tests::prelude::*;

#[test]
fn selection_serializes_to_json() {
    let f = ComplexRaisedRow::fields();

    let selection = EntitySelection::<ComplexRaisedRow>::new()
        .where_equal(f.unique_name(), "A")
        .order_by_descending(f.integer_value())
        .take(5);

    let value = serde_json::to_value(selection.untyped()).unwrap();

    assert_eq!(value["entity"], json!("ComplexRaisedRow"));
    assert_eq!(value["page"], json!({ "row_offset": 0, "size": 5 }));
    assert_eq!(value["linked"], json!(null));

    let filter = &value["filters"][0]["Value"];
    assert_eq!(filter["filter_type"], json!("Equality"));
    assert_eq!(filter["values"], json!([{ "String": "A" }]));
    assert_eq!(filter["attribute"]["attribute"], json!("unique_name"));

    assert_eq!(value["order_by"][0]["descending"], json!(true));
}

#[test]
fn update_set_serializes_assignments_in_order() {
    let f = ComplexRaisedRow::fields();

    let update = UpdateSet::<ComplexRaisedRow>::new()
        .set(f.integer_value(), 4)
        .unwrap()
        .set(f.description(), None)
        .unwrap();

    let value = serde_json::to_value(update.untyped()).unwrap();
    let assignments = value["assignments"].as_array().unwrap();

    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[0][1], json!({ "I64": 4 }));
    assert_eq!(assignments[1][0]["attribute"], json!("description"));
    assert_eq!(assignments[1][1], json!("Null"));
}

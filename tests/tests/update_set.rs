use pretty_assertions::assert_eq;
use tests::prelude::*;

fn assigned(update: &UpdateSet<ComplexRaisedRow>) -> Vec<String> {
    update
        .assignments()
        .attributes()
        .map(|attribute| attribute.to_string())
        .collect()
}

#[test]
fn set_from_skips_keys_and_navigation() {
    let definitions = definitions!(ComplexRaisedRow);
    let row = ComplexRaisedRow::sample();

    let key = assert_ok!(EntitySelection::new().match_key(&row, &definitions));
    let update = assert_ok!(UpdateSet::<ComplexRaisedRow>::new().set_from(&row, &definitions))
        .filter(key);

    assert_eq!(
        assigned(&update),
        [
            "ComplexRaisedRow.unique_name",
            "ComplexRaisedRow.sub_entity_id",
            "ComplexRaisedRow.created_by_id",
            "ComplexRaisedRow.modified_by_id",
            "ComplexRaisedRow.description",
            "ComplexRaisedRow.integer_value",
        ]
    );
    assert_eq!(
        update.property_values(),
        [
            Value::from("Unique"),
            Value::I32(2),
            Value::I32(7),
            Value::I32(8),
            Value::Null,
            Value::I64(12),
            Value::I64(43),
        ]
    );
}

#[test]
fn set_matching_assigns_selected_attributes() {
    let row = ComplexRaisedRow::sample();
    let f = ComplexRaisedRow::fields();

    let update = assert_ok!(UpdateSet::<ComplexRaisedRow>::new()
        .set_matching(&row, &[f.integer_value().erase(), f.unique_name().erase()]));

    assert_eq!(
        assigned(&update),
        ["ComplexRaisedRow.integer_value", "ComplexRaisedRow.unique_name"]
    );
    assert_eq!(
        update.property_values(),
        [Value::I64(12), Value::from("Unique")]
    );
}

#[test]
fn attributes_are_assigned_once() {
    let f = ComplexRaisedRow::fields();

    let update = assert_ok!(UpdateSet::<ComplexRaisedRow>::new().set(f.unique_name(), "A"));
    let err = assert_err!(update.set(f.unique_name(), "B"));

    assert!(err.is_invariant_violation());
    assert_eq!(
        err.to_string(),
        "invariant violation: attribute `ComplexRaisedRow.unique_name` is already assigned"
    );
}

#[test]
fn only_direct_attributes_are_assignable() {
    let f = ComplexRaisedRow::fields();

    assert_err!(
        UpdateSet::<ComplexRaisedRow>::new().set(f.sub_entity().unique_name(), "A"),
        "invalid argument: `ComplexRaisedRow.sub_entity.unique_name` is not a direct attribute \
         of `ComplexRaisedRow`"
    );
}

#[test]
fn update_set_maps_assignments_and_filter() {
    let definitions = Definitions::new();
    let f = ComplexRaisedRow::fields();

    let update = assert_ok!(UpdateSet::<ComplexRaisedRow>::new().set(f.description(), None))
        .set(f.integer_value(), 3);
    let update = assert_ok!(update)
        .filter(EntitySelection::new().where_equal(f.sub_entity().unique_name(), "S"));

    let mapped = assert_ok!(update.map_set::<ComplexEntity>(&definitions));
    let attributes: Vec<_> = mapped
        .assignments()
        .attributes()
        .map(|attribute| attribute.to_string())
        .collect();

    assert_eq!(
        attributes,
        ["ComplexEntity.description", "ComplexEntity.integer_value"]
    );
    assert_eq!(mapped.untyped().selection.entity, ComplexEntity::entity_type());
    assert_eq!(mapped.property_values(), update.property_values());
}

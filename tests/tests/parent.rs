use pretty_assertions::assert_eq;
use tests::prelude::*;

fn roots() -> EntitySelection<ChildRaisedRow> {
    EntitySelection::new().where_equal(ChildRaisedRow::fields().name(), "Root")
}

#[test]
fn parent_values_bind_first() {
    let f = ChildRaisedRow::fields();

    let selection = assert_ok!(EntitySelection::<ChildRaisedRow>::new()
        .greater_than(f.child_id(), 10)
        .with_parent("Parents", roots(), f.child_id(), f.parent_id()));

    let parent = selection.untyped().parent.as_ref().unwrap();
    assert_eq!(parent.name, "Parents");
    assert_eq!(
        parent.relations[0].relation_attribute().to_string(),
        "Parents.child_id"
    );
    assert_eq!(
        parent.relations[0].source_attribute().to_string(),
        "ChildRaisedRow.parent_id"
    );

    assert_eq!(
        selection.property_values(),
        [Value::from("Root"), Value::I64(10)]
    );
}

#[test]
fn only_one_parent_expression() {
    let f = ChildRaisedRow::fields();

    let selection = assert_ok!(EntitySelection::<ChildRaisedRow>::new().with_parent(
        "Parents",
        roots(),
        f.child_id(),
        f.parent_id(),
    ));

    assert_err!(
        selection.with_parent("Again", roots(), f.child_id(), f.parent_id()),
        "invariant violation: selection of `ChildRaisedRow` already has parent expression \
         `Parents`"
    );
}

#[test]
fn parent_name_is_required() {
    let f = ChildRaisedRow::fields();

    let err = assert_err!(EntitySelection::<ChildRaisedRow>::new().with_parent(
        "",
        roots(),
        f.child_id(),
        f.parent_id(),
    ));
    assert!(err.is_invalid_argument());
}

#[test]
fn parent_expression_is_verified() {
    let definitions = definitions!(ChildRaisedRow);
    let f = ChildRaisedRow::fields();

    let selection = assert_ok!(EntitySelection::<ChildRaisedRow>::new().with_parent(
        "Parents",
        roots(),
        f.child_id(),
        f.parent_id(),
    ));

    assert_ok!(selection.verify(&definitions));
}

use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn inferred_join_equals_explicit_join() {
    let f = ComplexRaisedRow::fields();

    let inferred = assert_ok!(EntitySelection::<ComplexRaisedRow>::new()
        .inner_join(f.sub_entity_id(), f.sub_entity().sub_entity_id()));
    let explicit = assert_ok!(EntitySelection::<ComplexRaisedRow>::new().join(
        f.sub_entity_id(),
        SubRow::fields().sub_entity_id(),
        None,
        None,
    ));

    assert_eq!(inferred.relations(), explicit.relations());
}

#[test]
fn inferred_join_keeps_relation_alias() {
    let f = ComplexRaisedRow::fields();

    let inferred = assert_ok!(EntitySelection::<ComplexRaisedRow>::new()
        .left_join(f.created_by_id(), f.created_by().person_id()));
    let explicit = assert_ok!(EntitySelection::<ComplexRaisedRow>::new().left_join_between(
        f.created_by_id(),
        PersonRow::fields().person_id(),
        None,
        Some("CreatedBy"),
    ));
    let unaliased = assert_ok!(EntitySelection::<ComplexRaisedRow>::new().left_join_between(
        f.created_by_id(),
        PersonRow::fields().person_id(),
        None,
        None,
    ));

    assert_eq!(inferred.relations(), explicit.relations());
    assert_ne!(inferred.relations(), unaliased.relations());

    let relation = &inferred.relations()[0];
    assert_eq!(relation.join_type, JoinType::Left);
    assert_eq!(relation.relation_attribute().to_string(), "CreatedBy.person_id");
}

#[test]
fn join_type_is_part_of_equality() {
    let f = ComplexRaisedRow::fields();

    let inner = assert_ok!(EntityRelationSet::<ComplexRaisedRow>::new()
        .inner_join(f.sub_entity_id(), f.sub_entity().sub_entity_id()));
    let left = assert_ok!(EntityRelationSet::<ComplexRaisedRow>::new()
        .left_join(f.sub_entity_id(), f.sub_entity().sub_entity_id()));

    assert_ne!(inner.relations(), left.relations());
}

#[test]
fn nested_join_is_owned_by_the_navigated_entity() {
    let f = ComplexRaisedRow::fields();

    let selection = assert_ok!(EntitySelection::<ComplexRaisedRow>::new()
        .inner_join(f.sub_entity_id(), f.sub_entity().sub_entity_id()))
    .inner_join(
        f.sub_entity().sub_sub_entity_id(),
        f.sub_entity().sub_sub_entity().sub_sub_entity_id(),
    );
    let selection = assert_ok!(selection);

    let relation = &selection.relations()[1];
    assert_eq!(relation.source_attribute().to_string(), "SubRow.sub_sub_entity_id");
    assert_eq!(
        relation.relation_attribute().to_string(),
        "SubSubRow.sub_sub_entity_id"
    );
}

#[test]
fn self_relation_through_alias() {
    let f = ChildRaisedRow::fields();

    let selection = assert_ok!(EntitySelection::<ChildRaisedRow>::new()
        .inner_join(f.parent_id(), f.parent().child_id()));
    let relation = &selection.relations()[0];

    assert_eq!(format!("{:?}", relation.source_entity()), "ChildRaisedRow");
    assert_eq!(
        format!("{:?}", relation.relation_entity()),
        "ChildRaisedRow as Parent"
    );
}

#[test]
fn self_relation_without_alias_is_rejected() {
    let err = assert_err!(EntitySelection::<ChildRaisedRow>::new().join(
        ChildRaisedRow::fields().parent_id(),
        ChildRaisedRow::fields().child_id(),
        None,
        None,
    ));

    assert!(err.is_invalid_relation());
    assert_eq!(
        err.to_string(),
        "invalid relation: `ChildRaisedRow.parent_id` and `ChildRaisedRow.child_id` are \
         attributes of the same entity occurrence `ChildRaisedRow`"
    );
}

#[test]
fn relation_set_is_attached_in_order() {
    let f = ComplexRaisedRow::fields();

    let relations = assert_ok!(EntityRelationSet::<ComplexRaisedRow>::new()
        .inner_join(f.sub_entity_id(), f.sub_entity().sub_entity_id()))
    .left_join(f.modified_by_id(), f.modified_by().person_id());
    let relations = assert_ok!(relations);
    assert_eq!(relations.len(), 2);

    let selection = EntitySelection::<ComplexRaisedRow>::new().with_relations(relations);
    let targets: Vec<_> = selection
        .relations()
        .iter()
        .map(|relation| relation.relation_attribute().to_string())
        .collect();

    assert_eq!(targets, ["SubRow.sub_entity_id", "ModifiedBy.person_id"]);
}

#[test]
fn join_requires_a_key_attribute() {
    let f = ComplexRaisedRow::fields();

    assert_err!(
        EntitySelection::<ComplexRaisedRow>::new()
            .inner_join(f.unique_name(), f.sub_entity().unique_name()),
        "invalid relation: join between `ComplexRaisedRow.unique_name` and \
         `SubRow.unique_name` does not reference a key"
    );
    assert_err!(
        EntityRelationSet::<ComplexRaisedRow>::new().join(
            f.unique_name(),
            PersonRow::fields().first_name(),
            None,
            Some("CreatedBy"),
        ),
        "invalid relation: join between `ComplexRaisedRow.unique_name` and \
         `CreatedBy.first_name` does not reference a key"
    );

    // A key on either side is enough.
    assert_ok!(EntitySelection::<ComplexRaisedRow>::new()
        .inner_join(f.sub_entity().sub_entity_id(), f.sub_entity_id()));
}

#[test]
fn verify_accepts_keyed_joins() {
    let definitions = definitions!(ComplexRaisedRow, SubRow, SubSubRow, PersonRow);
    let f = ComplexRaisedRow::fields();

    let joined = assert_ok!(EntitySelection::<ComplexRaisedRow>::new()
        .inner_join(f.created_by_id(), f.created_by().person_id()));
    assert_ok!(joined.verify(&definitions));
}

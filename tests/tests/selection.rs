use pretty_assertions::assert_eq;
use tests::prelude::*;

fn named(name: &str) -> EntitySelection<ComplexRaisedRow> {
    EntitySelection::new().where_equal(ComplexRaisedRow::fields().unique_name(), name)
}

fn chain(selection: &EntitySelection<ComplexRaisedRow>) -> Vec<SelectionLinkType> {
    selection
        .untyped()
        .link_chain()
        .map(|linked| linked.link)
        .collect()
}

#[test]
fn nested_union_links_each_level() {
    let selection = named("A").union(named("B").union(named("C")));

    let linked = selection.untyped().linked.as_ref().unwrap();
    assert_eq!(linked.link, SelectionLinkType::Union);

    let nested = linked.selection.linked.as_ref().unwrap();
    assert_eq!(nested.link, SelectionLinkType::Union);
    assert_eq!(
        selection.property_values(),
        [Value::from("A"), Value::from("B"), Value::from("C")]
    );
}

#[test]
fn intersect_and_except_use_their_link_types() {
    let intersected = named("A").intersect(named("B").intersect(named("C")));
    assert_eq!(
        chain(&intersected),
        [SelectionLinkType::Intersection, SelectionLinkType::Intersection]
    );

    let excepted = named("A").except(named("B").except(named("C")));
    assert_eq!(
        chain(&excepted),
        [SelectionLinkType::Exception, SelectionLinkType::Exception]
    );
}

#[test]
fn sequential_links_append_to_the_tail() {
    let selection = named("A")
        .union(named("B"))
        .except(named("C"))
        .intersect(named("D"));

    assert_eq!(
        chain(&selection),
        [
            SelectionLinkType::Union,
            SelectionLinkType::Exception,
            SelectionLinkType::Intersection,
        ]
    );
    assert_eq!(
        selection.property_values(),
        [
            Value::from("A"),
            Value::from("B"),
            Value::from("C"),
            Value::from("D"),
        ]
    );
}

#[test]
fn order_keys_keep_call_order_and_direction() {
    let f = ComplexRaisedRow::fields();

    let selection = EntitySelection::<ComplexRaisedRow>::new()
        .order_by(f.unique_name())
        .order_by_descending(f.integer_value())
        .order_by(f.sub_entity().unique_name())
        .order_by_descending(f.created_by().last_name());

    let keys: Vec<_> = selection
        .untyped()
        .order_by
        .iter()
        .map(|order| (order.attribute.to_string(), order.descending))
        .collect();

    assert_eq!(
        keys,
        [
            ("ComplexRaisedRow.unique_name".to_string(), false),
            ("ComplexRaisedRow.integer_value".to_string(), true),
            ("SubRow.unique_name".to_string(), false),
            ("CreatedBy.last_name".to_string(), true),
        ]
    );
}

#[test]
fn set_page_computes_row_offset() {
    let selection = EntitySelection::<ComplexRaisedRow>::new().take(14);
    let selection = assert_ok!(selection.set_page(2));

    assert_eq!(selection.page().row_offset, 14);
    assert_eq!(selection.page().size, 14);
    assert_eq!(selection.page().page_number(), Some(2));
}

#[test]
fn page_zero_is_rejected() {
    let selection = EntitySelection::<ComplexRaisedRow>::new().take(14);
    let err = assert_err!(selection.set_page(0));
    assert!(err.is_invalid_argument());
}

#[test]
fn skip_without_take_is_unpaged() {
    let f = ComplexRaisedRow::fields();

    let selection = EntitySelection::<ComplexRaisedRow>::new()
        .where_equal(f.integer_value(), 1)
        .skip(20);

    assert!(!selection.untyped().is_paged());
    assert_eq!(selection.property_values(), [Value::I64(1)]);

    let selection = selection.seek(|page| page.take(5));
    assert_eq!(
        selection.property_values(),
        [Value::I64(1), Value::U64(20), Value::U64(5)]
    );
}

#[test]
fn projections_keep_order_alias_and_aggregate() {
    let f = ComplexRaisedRow::fields();

    let selection = EntitySelection::<ComplexRaisedRow>::new()
        .select(f.complex_entity_id())
        .select_as(f.sub_entity().unique_name(), "SubName")
        .select_aggregate(f.integer_value(), AggregateFunction::Sum, "Total");

    let select = &selection.untyped().select;
    assert_eq!(select.len(), 3);

    assert_eq!(select[0].attribute.to_string(), "ComplexRaisedRow.complex_entity_id");
    assert_eq!(select[0].alias, None);
    assert_eq!(select[0].aggregate, AggregateFunction::None);

    assert_eq!(select[1].attribute.to_string(), "SubRow.unique_name");
    assert_eq!(select[1].alias.as_deref(), Some("SubName"));

    assert_eq!(select[2].aggregate, AggregateFunction::Sum);
    assert_eq!(select[2].alias.as_deref(), Some("Total"));
}

#[test]
fn include_requires_values() {
    let f = ComplexRaisedRow::fields();

    let err = assert_err!(
        EntitySelection::<ComplexRaisedRow>::new().include(f.integer_value(), Vec::<i64>::new())
    );
    assert_eq!(
        err.to_string(),
        "invalid argument: MatchesSet filter on `ComplexRaisedRow.integer_value` requires at \
         least one value"
    );
}

#[test]
fn verify_resolves_every_attribute() {
    let definitions = definitions!(ComplexRaisedRow, SubRow, SubSubRow, PersonRow);
    let f = ComplexRaisedRow::fields();

    let selection = assert_ok!(EntitySelection::<ComplexRaisedRow>::new()
        .select(f.sub_entity().sub_sub_entity().unique_name())
        .is_set(f.description())
        .exclude(f.sub_entity_id(), [1, 2]))
    .order_by(f.modified_by().first_name())
    .union(named("A"));

    assert_ok!(selection.verify(&definitions));
}

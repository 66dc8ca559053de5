use pretty_assertions::assert_eq;
use quarry::{
    definitions::{AttributeKind, EntityDefinition},
    schema::EntityType,
};
use std::sync::Arc;
use tests::prelude::*;

/// Serves definitions only for the listed entity types.
struct Restricted {
    definitions: Definitions,
    served: Vec<EntityType>,
}

impl DefinitionProvider for Restricted {
    fn resolve(&self, entity: EntityType) -> quarry::Result<Arc<EntityDefinition>> {
        if !self.served.contains(&entity) {
            return Err(anyhow::anyhow!("`{entity}` is not served here").into());
        }

        self.definitions.resolve(entity)
    }
}

#[test]
fn derived_schema_locates_columns() {
    let definitions = definitions!(ComplexRaisedRow, SubRow, SubSubRow, PersonRow);
    let f = ComplexRaisedRow::fields();

    let key = assert_ok!(definitions.find(f.complex_entity_id().location()));
    assert_eq!(key.reference_name(), "ComplexEntity.ComplexEntityId");
    assert_eq!(key.entity.qualified_name(), "dbo.ComplexEntity");
    assert_eq!(key.kind, AttributeKind::Direct);
    assert!(key.is_primary_key);
    assert!(key.is_auto_number);

    let description = assert_ok!(definitions.find(f.description().location()));
    assert!(description.nullable);
    assert!(!description.is_primary_key);

    let sub_key = assert_ok!(definitions.find(f.sub_entity().sub_entity_id().location()));
    assert_eq!(sub_key.kind, AttributeKind::RelatedAutoNumberKey);
    assert_eq!(sub_key.reference_name(), "SubEntity.sub_entity_id");

    let creator = assert_ok!(definitions.find(f.created_by().last_name().location()));
    assert_eq!(creator.kind, AttributeKind::Related);
    assert_eq!(creator.alias(), Some("CreatedBy"));
    assert_eq!(creator.reference_name(), "CreatedBy.last_name");
}

#[test]
fn flat_related_attribute_resolves_to_related_table() {
    let definitions = definitions!(ComplexFlatRow, SubRow, PersonRow);
    let f = ComplexFlatRow::fields();

    let location = f.created_by_first_name().into_location();
    assert_eq!(location.to_string(), "CreatedBy.first_name");
    assert_eq!(location.path().to_string(), "ComplexFlatRow.created_by_first_name");

    let attribute = assert_ok!(definitions.find(&location));
    assert_eq!(attribute.entity.qualified_name(), "dbo.Person");
    assert_eq!(attribute.reference_name(), "CreatedBy.first_name");

    let sub_name = assert_ok!(definitions.find(f.sub_entity_unique_name().location()));
    assert_eq!(sub_name.reference_name(), "SubEntity.unique_name");
}

#[test]
fn distinct_attributes_across_navigations() {
    let definitions = definitions!(ComplexFlatRow, ComplexRaisedRow);
    let raised = ComplexRaisedRow::fields();

    let locations = [
        ComplexFlatRow::fields().created_by_first_name().into_location(),
        raised.created_by().first_name().into_location(),
        raised.modified_by().first_name().into_location(),
    ];

    let distinct = assert_ok!(definitions.distinct_attributes(&locations));
    let names: Vec<_> = distinct.iter().map(|a| a.reference_name()).collect();

    assert_eq!(names, ["CreatedBy.first_name", "ModifiedBy.first_name"]);
}

#[test]
fn builder_configures_table_names() {
    let definitions = assert_ok!(Definitions::builder()
        .table_name_prefix("app_")
        .default_container("sales")
        .register::<ComplexEntity>()
        .register::<ComplexRaisedRow>()
        .build());

    let entity = assert_ok!(definitions.resolve(ComplexEntity::entity_type()));
    assert_eq!(entity.location().qualified_name(), "sales.app_ComplexEntity");

    let row = assert_ok!(definitions.resolve(ComplexRaisedRow::entity_type()));
    assert_eq!(row.location().qualified_name(), "dbo.app_ComplexEntity");
}

#[test]
fn self_referential_entity_registers() {
    let definitions = definitions!(ChildRaisedRow);

    let child = assert_ok!(definitions.resolve(ChildRaisedRow::entity_type()));
    let relations: Vec<_> = child
        .relations()
        .map(|(field, relation)| (field.name.app_name, relation.alias))
        .collect();

    assert_eq!(relations, [("parent", Some("Parent"))]);
    assert_eq!(definitions.entities(), [ChildRaisedRow::entity_type()]);
}

#[test]
fn unregistered_entities_resolve_lazily() {
    let definitions = Definitions::new();
    assert!(!definitions.is_resolved(PersonRow::entity_type()));

    let f = ComplexRaisedRow::fields();
    assert_ok!(definitions.find(f.modified_by().first_name().location()));

    assert!(!definitions.is_resolved(ComplexRaisedRow::entity_type()));
    assert!(definitions.is_resolved(PersonRow::entity_type()));
}

#[test]
fn custom_provider_verifies_selections() {
    let provider = Restricted {
        definitions: Definitions::new(),
        served: vec![ComplexRaisedRow::entity_type(), PersonRow::entity_type()],
    };
    let f = ComplexRaisedRow::fields();

    let joined = assert_ok!(EntitySelection::<ComplexRaisedRow>::new()
        .inner_join(f.created_by_id(), f.created_by().person_id()));
    assert_ok!(joined.verify(&provider));
    assert_ok!(provider.verify_relation(&joined.relations()[0]));

    let nested = EntitySelection::<ComplexRaisedRow>::new()
        .where_equal(f.sub_entity().unique_name(), "Sub");
    let err = assert_err!(nested.verify(&provider), "`SubRow` is not served here");
    assert!(std::error::Error::source(&err).is_some());
}

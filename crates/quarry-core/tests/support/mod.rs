#![allow(dead_code)]

use quarry_core::{
    schema::{Entity, EntityType, Field, FieldName, FieldPrimitive, FieldTy, Related, Relation},
    stmt::{
        AttributeLocation, AttributePath, AttributeStep, EntityReference, Member, RelatedAttribute,
        RelationStep, Type,
    },
    Register,
};

pub struct Order;
pub struct Customer;
pub struct Address;
pub struct Invoice;
pub struct Receipt;

pub fn attr(index: usize, name: &'static str, ty: Type) -> Field {
    Field {
        index,
        name: FieldName {
            app_name: name,
            storage_name: None,
        },
        ty: FieldTy::Primitive(FieldPrimitive { ty, related: None }),
        nullable: false,
        primary_key: false,
        auto: false,
    }
}

pub fn column(mut field: Field, column: &'static str) -> Field {
    field.name.storage_name = Some(column);
    field
}

pub fn key(mut field: Field) -> Field {
    field.primary_key = true;
    field
}

pub fn auto(mut field: Field) -> Field {
    field.auto = true;
    field
}

pub fn nav(
    index: usize,
    name: &'static str,
    target: EntityType,
    alias: Option<&'static str>,
) -> Field {
    Field {
        index,
        name: FieldName {
            app_name: name,
            storage_name: None,
        },
        ty: FieldTy::Relation(Relation { target, alias }),
        nullable: true,
        primary_key: false,
        auto: false,
    }
}

pub fn related(
    index: usize,
    name: &'static str,
    ty: Type,
    target: EntityType,
    attribute: &'static str,
) -> Field {
    Field {
        index,
        name: FieldName {
            app_name: name,
            storage_name: None,
        },
        ty: FieldTy::Primitive(FieldPrimitive {
            ty,
            related: Some(Related {
                target,
                alias: None,
                attribute,
            }),
        }),
        nullable: false,
        primary_key: false,
        auto: false,
    }
}

fn order_fields() -> Vec<Field> {
    vec![
        auto(key(column(attr(0, "order_id", Type::I64), "OrderId"))),
        attr(1, "customer_id", Type::I64),
        attr(2, "status", Type::String),
        nav(3, "customer", Customer::entity_type(), None),
        nav(4, "shipping", Address::entity_type(), Some("Shipping")),
        related(5, "customer_name", Type::String, Customer::entity_type(), "name"),
        attr(6, "shipping_address_id", Type::I64),
    ]
}

impl Register for Order {
    fn entity_type() -> EntityType {
        EntityType::of::<Order>("Order", Order::schema)
    }

    fn schema() -> Entity {
        Entity {
            name: "Order",
            table: Some("Orders"),
            container: Some("sales"),
            fields: order_fields(),
        }
    }
}

impl Register for Invoice {
    fn entity_type() -> EntityType {
        EntityType::of::<Invoice>("Invoice", Invoice::schema)
    }

    fn schema() -> Entity {
        let mut fields = order_fields();
        fields.push(attr(7, "total", Type::F64));

        Entity {
            name: "Invoice",
            table: None,
            container: None,
            fields,
        }
    }
}

impl Register for Receipt {
    fn entity_type() -> EntityType {
        EntityType::of::<Receipt>("Receipt", Receipt::schema)
    }

    fn schema() -> Entity {
        Entity {
            name: "Receipt",
            table: None,
            container: None,
            fields: vec![
                auto(key(attr(0, "order_id", Type::I64))),
                attr(1, "customer_id", Type::I64),
                attr(2, "status", Type::I32),
                attr(3, "customer", Type::I64),
            ],
        }
    }
}

impl Register for Customer {
    fn entity_type() -> EntityType {
        EntityType::of::<Customer>("Customer", Customer::schema)
    }

    fn schema() -> Entity {
        Entity {
            name: "Customer",
            table: None,
            container: Some("sales"),
            fields: vec![
                key(attr(0, "customer_id", Type::I64)),
                attr(1, "name", Type::String),
                attr(2, "address_id", Type::I64),
                nav(3, "address", Address::entity_type(), None),
            ],
        }
    }
}

impl Register for Address {
    fn entity_type() -> EntityType {
        EntityType::of::<Address>("Address", Address::schema)
    }

    fn schema() -> Entity {
        Entity {
            name: "Address",
            table: None,
            container: None,
            fields: vec![
                auto(key(attr(0, "address_id", Type::I64))),
                attr(1, "city", Type::String),
            ],
        }
    }
}

/// Builds a path from `T` by field names, following relations for every
/// segment but the last.
pub fn path<T: Register>(segments: &[&'static str]) -> AttributePath {
    let (attribute, navigation) = segments.split_last().expect("empty path");
    let mut owner = T::entity_type();
    let mut relations = vec![];

    for name in navigation {
        let field = owner.schema().field_by_name(name).cloned().expect("no such field");
        let relation = field.ty.as_relation().expect("not a relation").clone();

        relations.push(RelationStep {
            field: Member::new(field.index, field.name.app_name),
            target: EntityReference::new(relation.target, relation.alias),
        });
        owner = relation.target;
    }

    let field = owner.schema().field_by_name(attribute).cloned().expect("no such field");
    let related = field
        .ty
        .as_primitive()
        .expect("not an attribute")
        .related
        .as_ref()
        .map(|related| RelatedAttribute {
            entity: EntityReference::new(related.target, related.alias),
            attribute: related.attribute,
        });

    AttributePath {
        root: T::entity_type(),
        relations,
        attribute: AttributeStep {
            field: Member::new(field.index, field.name.app_name),
            related,
        },
    }
}

pub fn loc<T: Register>(segments: &[&'static str]) -> AttributeLocation {
    AttributeLocation::resolve(path::<T>(segments))
}

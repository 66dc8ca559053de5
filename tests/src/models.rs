//! Fixture entities shared by the integration tests.
//!
//! The `*Row` types mirror table rows; `ComplexEntity` and its parts are the
//! domain shape selections get mapped to.

use quarry::Entity;

#[derive(Debug, Clone, Entity)]
#[table = "ComplexEntity"]
#[container = "dbo"]
pub struct ComplexRaisedRow {
    #[key]
    #[auto]
    #[column("ComplexEntityId")]
    pub complex_entity_id: i64,

    pub unique_name: String,

    pub sub_entity_id: i32,

    #[relation]
    pub sub_entity: Option<SubRow>,

    pub created_by_id: i32,

    #[relation(alias = "CreatedBy")]
    pub created_by: Option<PersonRow>,

    pub modified_by_id: i32,

    #[relation(alias = "ModifiedBy")]
    pub modified_by: Option<PersonRow>,

    pub description: Option<String>,

    pub integer_value: i64,
}

#[derive(Debug, Clone, Entity)]
#[table = "SubEntity"]
#[container = "dbo"]
pub struct SubRow {
    #[key]
    #[auto]
    pub sub_entity_id: i32,

    pub unique_name: String,

    pub sub_sub_entity_id: i32,

    #[relation]
    pub sub_sub_entity: Option<SubSubRow>,
}

#[derive(Debug, Clone, Entity)]
#[table = "SubSubEntity"]
#[container = "dbo"]
pub struct SubSubRow {
    #[key]
    #[auto]
    pub sub_sub_entity_id: i32,

    pub unique_name: String,
}

#[derive(Debug, Clone, Entity)]
#[table = "Person"]
#[container = "dbo"]
pub struct PersonRow {
    #[key]
    #[auto]
    pub person_id: i32,

    pub first_name: String,

    pub last_name: String,
}

/// A row that keeps a back reference to its parent row.
#[derive(Debug, Clone, Entity)]
#[table = "ChildEntity"]
#[container = "dbo"]
pub struct ChildRaisedRow {
    #[key]
    #[auto]
    pub child_id: i64,

    pub parent_id: i64,

    pub name: String,

    #[relation(alias = "Parent")]
    pub parent: Option<Box<Self>>,
}

/// The `ComplexEntity` table with related columns flattened onto the row.
#[derive(Debug, Clone, Entity)]
#[table = "ComplexEntity"]
#[container = "dbo"]
pub struct ComplexFlatRow {
    #[key]
    #[auto]
    #[column("ComplexEntityId")]
    pub complex_entity_id: i64,

    pub unique_name: String,

    pub sub_entity_id: i32,

    #[related(SubRow, attribute = unique_name)]
    pub sub_entity_unique_name: String,

    pub created_by_id: i32,

    #[related(PersonRow, alias = "CreatedBy", attribute = first_name)]
    pub created_by_first_name: String,
}

#[derive(Debug, Clone, Entity)]
pub struct ComplexEntity {
    #[key]
    #[auto]
    pub complex_entity_id: i64,

    pub unique_name: String,

    pub sub_entity_id: i32,

    #[relation]
    pub sub_entity: Option<SubEntity>,

    pub created_by_id: i32,

    #[relation(alias = "CreatedBy")]
    pub created_by: Option<Person>,

    pub modified_by_id: i32,

    #[relation(alias = "ModifiedBy")]
    pub modified_by: Option<Person>,

    pub description: Option<String>,

    pub integer_value: i64,
}

#[derive(Debug, Clone, Entity)]
pub struct SubEntity {
    #[key]
    #[auto]
    pub sub_entity_id: i32,

    pub unique_name: String,

    pub sub_sub_entity_id: i32,

    #[relation]
    pub sub_sub_entity: Option<SubSubEntity>,
}

#[derive(Debug, Clone, Entity)]
pub struct SubSubEntity {
    #[key]
    #[auto]
    pub sub_sub_entity_id: i32,

    pub unique_name: String,
}

#[derive(Debug, Clone, Entity)]
pub struct Person {
    #[key]
    #[auto]
    pub person_id: i32,

    pub first_name: String,

    pub last_name: String,
}

impl ComplexRaisedRow {
    /// A fully populated row with every navigation present.
    pub fn sample() -> ComplexRaisedRow {
        ComplexRaisedRow {
            complex_entity_id: 43,
            unique_name: "Unique".to_string(),
            sub_entity_id: 2,
            sub_entity: Some(SubRow {
                sub_entity_id: 2,
                unique_name: "Sub".to_string(),
                sub_sub_entity_id: 3,
                sub_sub_entity: Some(SubSubRow {
                    sub_sub_entity_id: 3,
                    unique_name: "SubSub".to_string(),
                }),
            }),
            created_by_id: 7,
            created_by: Some(PersonRow {
                person_id: 7,
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            }),
            modified_by_id: 8,
            modified_by: None,
            description: None,
            integer_value: 12,
        }
    }
}

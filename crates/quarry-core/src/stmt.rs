mod aggregate;
pub use aggregate::AggregateFunction;

mod attribute_location;
pub use attribute_location::{AttributeLocation, AttributeReference};

mod attribute_path;
pub use attribute_path::{AttributePath, AttributeStep, RelatedAttribute, RelationStep};

mod entity_reference;
pub use entity_reference::EntityReference;

mod entity_relation;
pub use entity_relation::{EntityRelation, JoinType};

mod filter;
pub use filter::{ExistsFilter, Filter};

mod filter_type;
pub use filter_type::FilterType;

mod linked_selection;
pub use linked_selection::{LinkedSelection, SelectionLinkType};

mod map;
pub use map::Mapper;

mod member;
pub use member::Member;

mod order_expr;
pub use order_expr::OrderExpression;

mod parent_expr;
pub use parent_expr::ParentExpression;

mod result_page;
pub use result_page::ResultPage;

mod select_expr;
pub use select_expr::SelectExpression;

mod selection;
pub use selection::Selection;

mod ty;
pub use ty::Type;

mod update_set;
pub use update_set::{Assignments, UpdateSet};

mod value;
pub use value::Value;

mod value_filter;
pub use value_filter::ValueFilter;

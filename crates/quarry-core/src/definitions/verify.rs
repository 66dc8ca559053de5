use super::{DefinitionProvider, DistinctAttribute, EntityAttributeDefinition};
use crate::{
    err,
    stmt::{AttributeLocation, EntityRelation, Filter, Selection},
    Error, Result,
};

use indexmap::IndexSet;

pub(super) fn relation<P>(provider: &P, relation: &EntityRelation) -> Result<()>
where
    P: DefinitionProvider + ?Sized,
{
    let source = provider.find(&relation.source)?;
    let target = provider.find(&relation.relation)?;

    if source.ty != target.ty {
        return Err(Error::invalid_relation(format!(
            "`{}` ({:?}) and `{}` ({:?}) have different types",
            relation.source_attribute(),
            source.ty,
            relation.relation_attribute(),
            target.ty
        )));
    }

    if !source.is_primary_key && !target.is_primary_key {
        return Err(Error::invalid_relation(format!(
            "join between `{}` and `{}` does not reference a key",
            relation.source_attribute(),
            relation.relation_attribute()
        )));
    }

    Ok(())
}

pub(super) fn selection<P>(provider: &P, selection: &Selection) -> Result<()>
where
    P: DefinitionProvider + ?Sized,
{
    for select in &selection.select {
        provider.find(&select.attribute)?;
    }

    for relation in &selection.relations {
        provider.verify_relation(relation)?;
    }

    for filter in &selection.filters {
        match filter {
            Filter::Value(filter) => {
                let definition = provider.find(&filter.attribute)?;

                if let Some(value) = filter.values.iter().find(|v| !definition.ty.is_a(v)) {
                    return Err(Error::invalid_argument(format!(
                        "{value:?} cannot be compared with `{}` of type {:?}",
                        filter.attribute, definition.ty
                    )));
                }
            }
            Filter::Exists(filter) => {
                for relation in &filter.relations {
                    provider.verify_relation(relation)?;
                }
                provider.verify_selection(&filter.selection)?;
            }
        }
    }

    for order in &selection.order_by {
        provider.find(&order.attribute)?;
    }

    if let Some(parent) = &selection.parent {
        provider
            .verify_selection(&parent.selection)
            .map_err(|e| e.context(err!("in parent expression `{}`", parent.name)))?;

        for relation in &parent.relations {
            provider.verify_relation(relation)?;
        }
    }

    if let Some(linked) = &selection.linked {
        provider.verify_selection(&linked.selection)?;
    }

    Ok(())
}

pub(super) fn distinct_attributes<'a, P>(
    provider: &P,
    locations: impl IntoIterator<Item = &'a AttributeLocation>,
) -> Result<Vec<EntityAttributeDefinition>>
where
    P: DefinitionProvider + ?Sized,
{
    let mut distinct = IndexSet::new();

    for location in locations {
        distinct.insert(DistinctAttribute(provider.find(location)?));
    }

    Ok(distinct
        .into_iter()
        .map(DistinctAttribute::into_inner)
        .collect())
}

use super::{
    AttributeLocation, AttributePath, AttributeStep, EntityReference, EntityRelation,
    ExistsFilter, Filter, LinkedSelection, Member, OrderExpression, ParentExpression,
    RelatedAttribute, RelationStep, SelectExpression, Selection, UpdateSet, ValueFilter,
};
use crate::{
    definitions::DefinitionProvider,
    err,
    schema::{EntityType, Field, FieldPrimitive},
    Error, Result,
};

use indexmap::{map::Entry, IndexMap};

/// Carries statements built against one entity type over to another.
///
/// Fields are matched by name. Relation fields must map to relation fields
/// and attributes to attributes of the same value type. Every entity type
/// reachable from the source through navigation fields is paired with the
/// type the same navigation reaches from the target, so explicit join
/// partners and sub-selections over those types are carried over too. Paths
/// and sub-selections over unrelated entity types are kept unchanged.
pub struct Mapper<'a> {
    source: EntityType,
    target: EntityType,
    provider: &'a dyn DefinitionProvider,

    /// Counterpart of each type reachable from `source`; `None` when the
    /// target side has no matching navigation.
    related: IndexMap<EntityType, Option<EntityType>>,
}

impl<'a> Mapper<'a> {
    pub fn new(
        source: EntityType,
        target: EntityType,
        provider: &'a dyn DefinitionProvider,
    ) -> Result<Mapper<'a>> {
        let mut related = IndexMap::new();
        related.insert(source, Some(target));

        let mut pending = vec![(source, Some(target))];

        while let Some((from, to)) = pending.pop() {
            let from = provider.resolve(from)?;
            let to = to.map(|to| provider.resolve(to)).transpose()?;

            for (field, relation) in from.relations() {
                if relation.target == source {
                    continue;
                }

                let counterpart = to
                    .as_ref()
                    .and_then(|to| to.field(field.name.app_name))
                    .and_then(|field| field.ty.as_relation())
                    .map(|relation| relation.target);

                match related.entry(relation.target) {
                    Entry::Vacant(entry) => {
                        entry.insert(counterpart);
                        pending.push((relation.target, counterpart));
                    }
                    // Reached as two different target types
                    Entry::Occupied(mut entry) => {
                        if *entry.get() != counterpart {
                            entry.insert(None);
                        }
                    }
                }
            }
        }

        Ok(Mapper {
            source,
            target,
            provider,
            related,
        })
    }

    pub fn selection(&self, selection: &Selection) -> Result<Selection> {
        if selection.entity != self.source {
            return Err(Error::invalid_argument(format!(
                "cannot map a selection of `{}` as a selection of `{}`",
                selection.entity, self.source
            )));
        }

        self.map_selection(selection)
            .map_err(|e| e.context(err!("mapping `{}` to `{}`", self.source, self.target)))
    }

    pub fn update_set(&self, update: &UpdateSet) -> Result<UpdateSet> {
        let mut mapped = UpdateSet::new(self.target);

        for (attribute, value) in update.assignments.iter() {
            mapped
                .assignments
                .set(self.location(attribute)?, value.clone())?;
        }

        mapped.selection = self.selection(&update.selection)?;
        Ok(mapped)
    }

    pub fn filter(&self, filter: &Filter) -> Result<Filter> {
        Ok(match filter {
            Filter::Value(filter) => Filter::Value(ValueFilter {
                attribute: self.location(&filter.attribute)?,
                filter_type: filter.filter_type,
                values: filter.values.clone(),
            }),
            Filter::Exists(filter) => Filter::Exists(ExistsFilter {
                negated: filter.negated,
                relations: self.relations(&filter.relations)?,
                selection: Box::new(self.nested(&filter.selection)?),
            }),
        })
    }

    pub fn relation(&self, relation: &EntityRelation) -> Result<EntityRelation> {
        EntityRelation::new(
            relation.join_type,
            self.location(&relation.source)?,
            self.location(&relation.relation)?,
            relation.source_alias.clone(),
            relation.relation_alias.clone(),
        )
    }

    pub fn location(&self, location: &AttributeLocation) -> Result<AttributeLocation> {
        match self.counterpart_type(location.root())? {
            Some(_) => Ok(AttributeLocation::resolve(self.path(location.path())?)),
            None => Ok(location.clone()),
        }
    }

    pub fn path(&self, path: &AttributePath) -> Result<AttributePath> {
        let Some(root) = self.counterpart_type(path.root)? else {
            return Ok(path.clone());
        };

        let mut source_owner = path.root;
        let mut target_owner = root;
        let mut relations = Vec::with_capacity(path.relations.len());

        for step in &path.relations {
            let field = self.counterpart(source_owner, target_owner, step.field)?;

            let Some(relation) = field.ty.as_relation() else {
                return Err(Error::mapping_failed(format!(
                    "`{}::{}` is a relation but `{}::{}` is not",
                    source_owner, step.field.name, target_owner, field.name.app_name
                )));
            };

            relations.push(RelationStep {
                field: Member::new(field.index, field.name.app_name),
                target: EntityReference::new(relation.target, relation.alias),
            });

            source_owner = step.target.entity;
            target_owner = relation.target;
        }

        let member = path.attribute.field;
        let field = self.counterpart(source_owner, target_owner, member)?;
        let source_ty = self.attribute_primitive(source_owner, member)?.ty;

        let Some(primitive) = field.ty.as_primitive() else {
            return Err(Error::mapping_failed(format!(
                "`{}::{}` is an attribute but `{}::{}` is a relation",
                source_owner, member.name, target_owner, field.name.app_name
            )));
        };

        if primitive.ty != source_ty {
            return Err(Error::mapping_failed(format!(
                "`{}::{}` is {:?} but `{}::{}` is {:?}",
                source_owner,
                member.name,
                source_ty,
                target_owner,
                field.name.app_name,
                primitive.ty
            )));
        }

        let mapped = AttributePath {
            root,
            relations,
            attribute: AttributeStep {
                field: Member::new(field.index, field.name.app_name),
                related: primitive.related.as_ref().map(|related| RelatedAttribute {
                    entity: EntityReference::new(related.target, related.alias),
                    attribute: related.attribute,
                }),
            },
        };

        log::trace!("mapped attribute path; from={path}, to={mapped}");

        Ok(mapped)
    }

    fn map_selection(&self, selection: &Selection) -> Result<Selection> {
        let select = selection
            .select
            .iter()
            .map(|select| {
                Ok(SelectExpression {
                    attribute: self.location(&select.attribute)?,
                    aggregate: select.aggregate,
                    alias: select.alias.clone(),
                })
            })
            .collect::<Result<_>>()?;

        let filters = selection
            .filters
            .iter()
            .map(|filter| self.filter(filter))
            .collect::<Result<_>>()?;

        let order_by = selection
            .order_by
            .iter()
            .map(|order| {
                Ok(OrderExpression {
                    attribute: self.location(&order.attribute)?,
                    descending: order.descending,
                })
            })
            .collect::<Result<_>>()?;

        let linked = match &selection.linked {
            Some(linked) => Some(LinkedSelection {
                link: linked.link,
                selection: Box::new(self.map_selection(&linked.selection)?),
            }),
            None => None,
        };

        let parent = match &selection.parent {
            Some(parent) => Some(ParentExpression {
                name: parent.name.clone(),
                selection: Box::new(self.nested(&parent.selection)?),
                relations: self.relations(&parent.relations)?,
            }),
            None => None,
        };

        Ok(Selection {
            entity: self.counterpart_type(selection.entity)?.unwrap_or(selection.entity),
            select,
            relations: self.relations(&selection.relations)?,
            filters,
            order_by,
            page: selection.page,
            linked,
            parent,
        })
    }

    fn nested(&self, selection: &Selection) -> Result<Selection> {
        match self.counterpart_type(selection.entity)? {
            Some(_) => self.map_selection(selection),
            None => Ok(selection.clone()),
        }
    }

    /// The type `entity` maps to, or `None` when it is unrelated to the
    /// source.
    fn counterpart_type(&self, entity: EntityType) -> Result<Option<EntityType>> {
        match self.related.get(&entity) {
            None => Ok(None),
            Some(Some(target)) => Ok(Some(*target)),
            Some(None) => Err(Error::mapping_failed(format!(
                "`{}` is related to `{}` but has no counterpart related to `{}`",
                entity, self.source, self.target
            ))),
        }
    }

    fn relations(&self, relations: &[EntityRelation]) -> Result<Vec<EntityRelation>> {
        relations
            .iter()
            .map(|relation| self.relation(relation))
            .collect()
    }

    fn counterpart(&self, source: EntityType, target: EntityType, member: Member) -> Result<Field> {
        let definition = self.provider.resolve(target)?;

        definition.field(member.name).cloned().ok_or_else(|| {
            Error::mapping_failed(format!(
                "`{}::{}` has no counterpart on `{}`",
                source, member.name, target
            ))
        })
    }

    fn attribute_primitive(&self, entity: EntityType, member: Member) -> Result<FieldPrimitive> {
        let definition = self.provider.resolve(entity)?;

        definition
            .attribute(member.name)
            .and_then(|field| field.ty.as_primitive())
            .cloned()
            .ok_or_else(|| {
                Error::invalid_path(format!("`{}` has no attribute `{}`", entity, member.name))
            })
    }
}

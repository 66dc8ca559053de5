use super::{
    EntityRelation, Filter, LinkedSelection, OrderExpression, ParentExpression, ResultPage,
    SelectExpression, SelectionLinkType, Value,
};
use crate::{schema::EntityType, Error, Result};

/// Untyped selection over one entity type.
///
/// Every list is kept in the order entries were added. An empty projection
/// list selects all attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Selection {
    pub entity: EntityType,
    pub select: Vec<SelectExpression>,
    pub relations: Vec<EntityRelation>,
    pub filters: Vec<Filter>,
    pub order_by: Vec<OrderExpression>,
    pub page: ResultPage,
    pub linked: Option<LinkedSelection>,
    pub parent: Option<ParentExpression>,
}

impl Selection {
    pub fn new(entity: EntityType) -> Selection {
        Selection {
            entity,
            select: vec![],
            relations: vec![],
            filters: vec![],
            order_by: vec![],
            page: ResultPage::default(),
            linked: None,
            parent: None,
        }
    }

    /// Attaches `selection` with a set operation.
    ///
    /// When this selection is already linked, the new link is appended to the
    /// end of the chain.
    pub fn link(&mut self, link: SelectionLinkType, selection: Selection) -> Result<()> {
        if selection.entity != self.entity {
            return Err(Error::invalid_argument(format!(
                "cannot link a selection of `{}` to a selection of `{}`",
                selection.entity, self.entity
            )));
        }

        self.append_link(link, selection);
        Ok(())
    }

    /// Like [`link`](Self::link), for callers that already know `selection`
    /// ranges over this selection's entity type.
    pub fn append_link(&mut self, link: SelectionLinkType, selection: Selection) {
        match &mut self.linked {
            Some(linked) => linked.selection.append_link(link, selection),
            None => {
                self.linked = Some(LinkedSelection {
                    link,
                    selection: Box::new(selection),
                })
            }
        }
    }

    /// Iterates the linked selections from the nearest to the last.
    pub fn link_chain(&self) -> impl Iterator<Item = &LinkedSelection> + '_ {
        let mut next = self.linked.as_ref();

        std::iter::from_fn(move || {
            let linked = next?;
            next = linked.selection.linked.as_ref();
            Some(linked)
        })
    }

    pub fn is_paged(&self) -> bool {
        self.page.is_paged()
    }

    /// Literal values in positional binding order.
    ///
    /// Parent expression values come first, then filter values in
    /// declaration order, then the page offset and size when paged, then the
    /// values of the linked selection.
    pub fn property_values(&self) -> Vec<Value> {
        let mut out = vec![];
        self.collect_values(&mut out);
        out
    }

    pub(super) fn collect_values(&self, out: &mut Vec<Value>) {
        if let Some(parent) = &self.parent {
            parent.selection.collect_values(out);
        }

        for filter in &self.filters {
            filter.collect_values(out);
        }

        if self.page.is_paged() {
            out.push(Value::U64(self.page.row_offset));
            out.push(Value::U64(self.page.size));
        }

        if let Some(linked) = &self.linked {
            linked.selection.collect_values(out);
        }
    }
}

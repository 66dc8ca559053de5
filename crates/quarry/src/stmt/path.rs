use crate::Entity;
use quarry_core::{
    stmt::{
        AttributeLocation, AttributePath, AttributeStep, EntityReference, Member,
        RelatedAttribute, RelationStep,
    },
    EntityType, Register,
};
use std::{fmt, marker::PhantomData};

/// Navigation from the root entity `R` to an occurrence of entity `E`.
///
/// Generated `fields()` accessors extend this one relation at a time and end
/// it with [`EntityPath::attribute`].
pub struct EntityPath<R, E> {
    root: EntityType,
    relations: Vec<RelationStep>,
    _p: PhantomData<fn() -> (R, E)>,
}

/// A typed path from the root entity `R` to an attribute holding `V`.
pub struct Path<R, V> {
    location: AttributeLocation,
    _p: PhantomData<fn() -> (R, V)>,
}

/// A path from `R` with the value type erased, used for selector lists.
pub struct AnyPath<R> {
    location: AttributeLocation,
    _p: PhantomData<fn() -> R>,
}

impl<R: Register> EntityPath<R, R> {
    pub fn root() -> Self {
        EntityPath {
            root: R::entity_type(),
            relations: vec![],
            _p: PhantomData,
        }
    }
}

impl<R, E> EntityPath<R, E> {
    /// Follows the relation field `member` to the entity occurrence `target`.
    pub fn relation<W: Entity>(&self, member: Member, target: EntityReference) -> EntityPath<R, W> {
        let mut relations = self.relations.clone();
        relations.push(RelationStep {
            field: member,
            target,
        });

        EntityPath {
            root: self.root,
            relations,
            _p: PhantomData,
        }
    }

    /// Ends the path on the attribute field `member`.
    pub fn attribute<V>(&self, member: Member, related: Option<RelatedAttribute>) -> Path<R, V> {
        Path::new(AttributePath {
            root: self.root,
            relations: self.relations.clone(),
            attribute: AttributeStep {
                field: member,
                related,
            },
        })
    }
}

impl<R, V> Path<R, V> {
    pub fn new(path: AttributePath) -> Self {
        Path {
            location: AttributeLocation::resolve(path),
            _p: PhantomData,
        }
    }

    pub fn location(&self) -> &AttributeLocation {
        &self.location
    }

    pub fn into_location(self) -> AttributeLocation {
        self.location
    }

    pub fn root(&self) -> EntityType {
        self.location.root()
    }

    pub fn erase(self) -> AnyPath<R> {
        AnyPath {
            location: self.location,
            _p: PhantomData,
        }
    }
}

impl<R> AnyPath<R> {
    pub fn location(&self) -> &AttributeLocation {
        &self.location
    }

    pub fn into_location(self) -> AttributeLocation {
        self.location
    }
}

impl<R, V> From<Path<R, V>> for AnyPath<R> {
    fn from(value: Path<R, V>) -> Self {
        value.erase()
    }
}

impl<R, V> From<Path<R, V>> for AttributeLocation {
    fn from(value: Path<R, V>) -> Self {
        value.location
    }
}

impl<R, E> Clone for EntityPath<R, E> {
    fn clone(&self) -> Self {
        EntityPath {
            root: self.root,
            relations: self.relations.clone(),
            _p: PhantomData,
        }
    }
}

impl<R, V> Clone for Path<R, V> {
    fn clone(&self) -> Self {
        Path {
            location: self.location.clone(),
            _p: PhantomData,
        }
    }
}

impl<R> Clone for AnyPath<R> {
    fn clone(&self) -> Self {
        AnyPath {
            location: self.location.clone(),
            _p: PhantomData,
        }
    }
}

impl<R, V> PartialEq for Path<R, V> {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl<R, V> Eq for Path<R, V> {}

impl<R, V> fmt::Debug for Path<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.location.path())
    }
}

impl<R, V> fmt::Display for Path<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.location.path())
    }
}

impl<R> fmt::Debug for AnyPath<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.location.path())
    }
}

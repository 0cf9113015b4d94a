//! Identity-based equality for domain objects.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

/// An object distinguished by its identifier rather than its attributes.
///
/// Two entities are the same entity when they have the same concrete type
/// and equal identifiers, regardless of their other fields.
pub trait Entity: Any {
    /// The identifier type.
    type Id: Clone + PartialEq + fmt::Debug + Send + Sync;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Identity equality: same concrete type and equal identifiers.
pub fn identity_eq<A, B>(left: &A, right: &B) -> bool
where
    A: Entity,
    B: Entity<Id = A::Id>,
{
    TypeId::of::<A>() == TypeId::of::<B>() && left.id() == right.id()
}

/// Identity hash: the hash of the concrete type name combined with the hash
/// of the identifier.
///
/// Entities that compare identity-equal hash to the same value.
pub fn identity_hash<E>(entity: &E) -> u64
where
    E: Entity,
    E::Id: Hash,
{
    let mut type_hasher = DefaultHasher::new();
    std::any::type_name::<E>().hash(&mut type_hasher);

    let mut id_hasher = DefaultHasher::new();
    entity.id().hash(&mut id_hasher);

    type_hasher.finish() ^ id_hasher.finish()
}

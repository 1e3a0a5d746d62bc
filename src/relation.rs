//! Relation graph introspection and dotted-path column resolution.
//!
//! Entities describe themselves through [`RelationGraph`]: a table name and a
//! lookup from relation name to [`Relation`]. [`resolve_column`] walks a path
//! like `author.country.name` through that graph and returns the
//! fully-qualified column on the last table reached (`countries.name`).

use sea_orm::{RelationDef, RelationType};
use std::fmt;

/// Relation registry of one entity type.
///
/// Usually implemented on the Sea-ORM unit `Entity` struct:
///
/// ```rust,ignore
/// impl RelationGraph for post::Entity {
///     fn table(&self) -> &str {
///         "posts"
///     }
///
///     fn relation(&self, name: &str) -> Option<Relation> {
///         match name {
///             "author" => Some(Relation::belongs_to(&user::Entity)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait RelationGraph: Sync {
    /// Table the entity is persisted in.
    fn table(&self) -> &str;

    /// Look up a declared relation by name. Unknown names return `None`.
    fn relation(&self, name: &str) -> Option<Relation>;
}

/// Cardinality of a relation. Informational only; resolution treats every
/// relation as a single related entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    BelongsTo,
    HasOne,
    HasMany,
}

/// A named association to another entity.
#[derive(Clone, Copy)]
pub struct Relation {
    kind: RelationKind,
    target: &'static dyn RelationGraph,
}

impl Relation {
    pub fn new(kind: RelationKind, target: &'static dyn RelationGraph) -> Self {
        Self { kind, target }
    }

    pub fn belongs_to(target: &'static dyn RelationGraph) -> Self {
        Self::new(RelationKind::BelongsTo, target)
    }

    pub fn has_one(target: &'static dyn RelationGraph) -> Self {
        Self::new(RelationKind::HasOne, target)
    }

    pub fn has_many(target: &'static dyn RelationGraph) -> Self {
        Self::new(RelationKind::HasMany, target)
    }

    /// Build a relation from a Sea-ORM `RelationDef`, taking the cardinality
    /// from the definition.
    ///
    /// Sea-ORM models `belongs_to` as a non-owning `HasOne`, so ownership
    /// decides between [`RelationKind::HasOne`] and [`RelationKind::BelongsTo`].
    pub fn from_def(def: &RelationDef, target: &'static dyn RelationGraph) -> Self {
        let kind = match def.rel_type {
            RelationType::HasMany => RelationKind::HasMany,
            RelationType::HasOne if def.is_owner => RelationKind::HasOne,
            RelationType::HasOne => RelationKind::BelongsTo,
        };
        Self::new(kind, target)
    }

    #[must_use]
    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    #[must_use]
    pub fn target(&self) -> &'static dyn RelationGraph {
        self.target
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("kind", &self.kind)
            .field("target", &self.target.table())
            .finish()
    }
}

/// Resolve a dotted path to a fully-qualified `table.column` string.
///
/// - `"title"` is returned unchanged.
/// - `"author.name"` becomes `"<author table>.name"` when `author` is a
///   relation of `entity`.
/// - `"author.country.name"` recurses into the author entity with
///   `"country.name"`.
/// - When the first segment is not a relation the whole path is returned
///   unchanged, so already-qualified columns such as `"posts.title"` pass
///   straight through.
///
/// Every step consumes one segment, so cyclic relation graphs terminate.
pub fn resolve_column<E>(entity: &E, path: &str) -> String
where
    E: RelationGraph + ?Sized,
{
    let Some((head, rest)) = path.split_once('.') else {
        return path.to_string();
    };

    let Some(relation) = entity.relation(head) else {
        tracing::debug!(
            path,
            relation = head,
            table = entity.table(),
            "No such relation, using path as a literal column"
        );
        return path.to_string();
    };

    let target = relation.target();
    if rest.contains('.') {
        resolve_column(target, rest)
    } else {
        format!("{}.{rest}", target.table())
    }
}

//! Records with a stable identity.

/// A domain record identified by a strongly-typed id.
///
/// Two entities are the same record when their ids match, even if other
/// fields (name, `updated_at`, ...) differ.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> Self::Id;

    fn same_record(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

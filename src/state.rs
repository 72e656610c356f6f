//! Collection update helpers shared by the view layer.
//!
//! Every mutation follows the same call-and-merge shape: the component
//! awaits the API response, then applies one of these helpers to its local
//! `Vec`. Keeping them as plain functions keeps the merge semantics
//! testable without spinning up a UI.

use crate::models::HasId;

/// Replaces the entry whose id matches `replacement`. Unknown ids are
/// dropped on the floor: a late response for a row deleted in the meantime
/// must not resurrect it.
pub fn merge_by_id<T: HasId>(items: &mut Vec<T>, replacement: T) {
    if let Some(slot) = items.iter_mut().find(|it| it.id() == replacement.id()) {
        *slot = replacement;
    }
}

/// Removes the entry with the given id, keeping everything else in order.
pub fn remove_by_id<T: HasId>(items: &mut Vec<T>, id: u64) {
    items.retain(|it| it.id() != id);
}

/// Default name for a freshly created list.
pub fn next_list_name<T>(lists: &[T]) -> String {
    format!("List {}", lists.len() + 1)
}

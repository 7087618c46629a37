pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod summary;

/// Convert a 1-based id shown to the user into a store index.
/// Id 0 maps to an index past any store, so it is treated as out of range.
pub(crate) fn id_to_index(id: usize) -> usize {
    id.checked_sub(1).unwrap_or(usize::MAX)
}

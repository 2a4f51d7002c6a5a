//! Ascending-id index over an annotated tree

use indexmap::IndexMap;

use crate::tree::{Annotated, NodeId};

impl<T> Annotated<T> {
    /// Map ids to their values, in ascending id order.
    ///
    /// The entries are inserted sorted, so iterating the returned map
    /// walks the branches in the order their ids were assigned. Works
    /// on any annotated tree, including ones that would fail
    /// [`Annotated::verify`].
    pub fn id_index(&self) -> IndexMap<NodeId, &T> {
        let mut pairs: Vec<(NodeId, &T)> =
            self.iter_post().map(|(value, id)| (*id, value)).collect();
        pairs.sort_by_key(|(id, _)| *id);
        pairs.into_iter().collect()
    }
}

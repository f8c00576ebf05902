//! Positions of the array elements currently being traversed.

/// A persistent stack of array indices.
///
/// Each array traversal step pushes a new node that borrows its parent, so
/// sibling elements never observe each other's positions.
#[derive(Debug, Clone, Copy, Default)]
pub enum IndexPath<'a> {
    #[default]
    Root,
    Push {
        parent: &'a IndexPath<'a>,
        index: usize,
    },
}

impl<'a> IndexPath<'a> {
    pub fn root() -> Self {
        IndexPath::Root
    }

    /// Returns a new path with `index` on top of `self`.
    pub fn push(&self, index: usize) -> IndexPath<'_> {
        IndexPath::Push {
            parent: self,
            index,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            IndexPath::Root => 0,
            IndexPath::Push { parent, .. } => parent.len() + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, IndexPath::Root)
    }

    /// Indices in the order they were pushed (outermost array first).
    pub fn to_vec(&self) -> Vec<usize> {
        let mut indexes = Vec::with_capacity(self.len());
        let mut node = self;
        while let IndexPath::Push { parent, index } = node {
            indexes.push(*index);
            node = *parent;
        }
        indexes.reverse();
        indexes
    }
}

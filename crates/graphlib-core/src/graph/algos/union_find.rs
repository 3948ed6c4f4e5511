//! Disjoint-set forest with union by size and path compression

use crate::error::{GraphError, Result};

/// Partition of the elements `0..len` into disjoint subsets.
///
/// Every element starts in its own singleton subset.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parents: Vec<usize>,
    sizes: Vec<usize>,
    subset_count: usize,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
            sizes: vec![1; len],
            subset_count: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of disjoint subsets currently present
    pub fn subset_count(&self) -> usize {
        self.subset_count
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.parents.len() {
            Ok(())
        } else {
            Err(GraphError::ElementOutOfRange {
                index,
                size: self.parents.len(),
            })
        }
    }

    /// Representative of the subset containing `index`.
    ///
    /// Every element visited on the way to the root is re-attached directly
    /// to the root.
    pub fn find(&mut self, index: usize) -> Result<usize> {
        self.check(index)?;
        let mut root = index;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut current = index;
        while self.parents[current] != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        Ok(root)
    }

    /// Merge the subsets containing `a` and `b`.
    ///
    /// Returns `false` when both already share a subset. The root of the
    /// smaller subset is attached under the root of the larger one.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }

        let (larger, smaller) = if self.sizes[root_a] < self.sizes[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parents[smaller] = larger;
        self.sizes[larger] += self.sizes[smaller];
        self.subset_count -= 1;
        Ok(true)
    }

    pub fn same_subset(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of elements in the subset containing `index`
    pub fn subset_size(&mut self, index: usize) -> Result<usize> {
        let root = self.find(index)?;
        Ok(self.sizes[root])
    }
}

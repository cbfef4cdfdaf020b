use serde::Serialize;
use std::collections::VecDeque;

/// the number of polygons that may be selected at once. pairwise statistics
/// and the union/intersection tools work on exactly this many.
pub const MAX_SELECTED_POLYGONS: usize = 2;

/// polygon indices picked in the active solution, oldest first. holds at
/// most [`MAX_SELECTED_POLYGONS`] indices; selecting another evicts the
/// oldest one.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Selection {
    indices: VecDeque<usize>,
}

impl Selection {
    pub fn new() -> Selection {
        Selection::default()
    }

    /// adds an index to the selection. selecting an index that is already
    /// selected does nothing.
    ///
    /// # Returns
    ///
    /// * the index evicted to make room, if any
    pub fn push(&mut self, index: usize) -> Option<usize> {
        if self.contains(index) {
            return None;
        }
        let evicted = if self.indices.len() >= MAX_SELECTED_POLYGONS {
            self.indices.pop_front()
        } else {
            None
        };
        self.indices.push_back(index);
        evicted
    }

    /// deselects the index if it is selected, otherwise selects it
    ///
    /// # Returns
    ///
    /// * true if the index is selected afterward
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.remove(index) {
            false
        } else {
            self.push(index);
            true
        }
    }

    pub fn remove(&mut self, index: usize) -> bool {
        let before = self.indices.len();
        self.indices.retain(|i| *i != index);
        self.indices.len() != before
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn indices(&self) -> Vec<usize> {
        self.indices.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

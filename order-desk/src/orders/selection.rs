//! Checked rows of the order table
//!
//! Ids are kept in the order they were checked, without duplicates. The set
//! is never pruned when filters change: a checked order that scrolls out of
//! view stays checked.

/// Set of checked order ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check or uncheck one order
    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            if !self.contains(id) {
                self.ids.push(id.to_string());
            }
        } else {
            self.ids.retain(|existing| existing != id);
        }
    }

    /// Flip one order; returns the new membership
    pub fn toggle(&mut self, id: &str) -> bool {
        let selected = !self.contains(id);
        self.set(id, selected);
        selected
    }

    /// Replace the set with exactly the visible ids
    pub fn select_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a str>) {
        self.ids.clear();
        for id in visible {
            if !self.contains(id) {
                self.ids.push(id.to_string());
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Header checkbox state: every visible row is checked and nothing else
    pub fn is_all_selected(&self, visible: &[&str]) -> bool {
        !visible.is_empty()
            && self.ids.len() == visible.len()
            && visible.iter().all(|id| self.contains(id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

use crate::modules::catalog;
use thiserror::Error;

pub const PLACEHOLDER: &str = "Select...";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown {kind} {name:?}")]
    Unknown { kind: &'static str, name: String },
}

/// Multi-select list over a fixed catalog.
///
/// Selected items keep the order in which they were first picked.
#[derive(Debug, Clone)]
pub struct MultiSelect {
    kind: &'static str,
    items: &'static [&'static str],
    selected: Vec<&'static str>,
    search: String,
}

impl MultiSelect {
    pub fn new(kind: &'static str, items: &'static [&'static str]) -> Self {
        Self {
            kind,
            items,
            selected: Vec::new(),
            search: String::new(),
        }
    }

    pub fn genres() -> Self {
        Self::new("genre", catalog::GENRES)
    }

    pub fn moods() -> Self {
        Self::new("mood", catalog::MOODS)
    }

    /// Selects `name` if absent, deselects it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, name: &str) -> Result<bool, SelectionError> {
        let item = self.resolve(name)?;
        if let Some(pos) = self.selected.iter().position(|s| *s == item) {
            self.selected.remove(pos);
            Ok(false)
        } else {
            self.selected.push(item);
            Ok(true)
        }
    }

    /// Selects `name`; selecting an already selected item is a no-op.
    pub fn select(&mut self, name: &str) -> Result<(), SelectionError> {
        let item = self.resolve(name)?;
        if !self.selected.contains(&item) {
            self.selected.push(item);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    pub fn visible(&self) -> Vec<&'static str> {
        catalog::filter(self.items, &self.search)
    }

    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn is_selected(&self, name: &str) -> bool {
        catalog::lookup(self.items, name).is_some_and(|item| self.selected.contains(&item))
    }

    pub fn joined(&self) -> String {
        self.selected.join(", ")
    }

    /// Trigger text: the selection, or the placeholder when nothing is picked.
    pub fn label(&self) -> String {
        if self.selected.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            self.joined()
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.selected.iter().map(|s| s.to_string()).collect()
    }

    fn resolve(&self, name: &str) -> Result<&'static str, SelectionError> {
        catalog::lookup(self.items, name).ok_or_else(|| SelectionError::Unknown {
            kind: self.kind,
            name: name.trim().to_string(),
        })
    }
}

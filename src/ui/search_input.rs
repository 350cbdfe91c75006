// src/ui/search_input.rs
//
// Search input component
//
// RULES:
// - Holds only the uncommitted draft
// - Nothing leaves until an explicit submission, blank drafts never leave

/// Draft text of the search box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    draft: String,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft (typing, pasting)
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commit the draft.
    ///
    /// Returns the trimmed query, or `None` when there is nothing to search
    /// for. The draft itself is kept, like a search box that keeps its text.
    pub fn submit(&self) -> Option<String> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

//! Search overlay state.
//!
//! The overlay is a simulation: an accepted query only produces an info
//! notification echoing the text. Nothing is ever looked up.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Suggestion tags offered under the input.
pub const DEFAULT_SUGGESTIONS: &[&str] =
    &["PlayStation 5", "Xbox Series X", "Nintendo Switch", "Gaming Headsets", "Controllers"];

pub const SEARCH_TITLE: &str = "Search Games & Products";
pub const SEARCH_PLACEHOLDER: &str = "Search for games, consoles, accessories...";
pub const SUGGESTIONS_TITLE: &str = "Popular Searches";

/// Text of the notification emitted for an accepted query.
pub fn search_message(query: &str) -> String {
    format!("Searching for: {query}")
}

/// Result of submitting the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only input, or no such modal. The modal stays as is.
    Rejected,
    /// The trimmed query was accepted and the modal started closing.
    Accepted { query: String },
}

impl SubmitOutcome {
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Rejected => None,
            Self::Accepted { query } => Some(search_message(query)),
        }
    }
}

/// One modal instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchModal {
    pub id: u64,
    pub query: String,
    pub visible: bool,
}

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    modal: Option<SearchModal>,
    next_id: u64,
}

impl SearchState {
    /// Insert a fresh, not yet visible modal, replacing any existing one.
    pub fn open(&mut self) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.modal = Some(SearchModal { id, query: String::new(), visible: false });
        id
    }

    pub fn modal(&self) -> Option<&SearchModal> {
        self.modal.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn is_visible(&self, id: u64) -> bool {
        self.get(id).is_some_and(|m| m.visible)
    }

    pub fn query(&self, id: u64) -> Option<&str> {
        self.get(id).map(|m| m.query.as_str())
    }

    pub fn reveal(&mut self, id: u64) -> bool {
        match self.get_mut(id) {
            Some(m) => {
                m.visible = true;
                true
            }
            None => false,
        }
    }

    pub fn set_query(&mut self, id: u64, query: impl Into<String>) {
        if let Some(m) = self.get_mut(id) {
            m.query = query.into();
        }
    }

    /// Submit the current input.
    pub fn submit(&mut self, id: u64) -> SubmitOutcome {
        let Some(query) = self.query(id).map(str::trim).filter(|q| !q.is_empty()).map(str::to_owned) else {
            return SubmitOutcome::Rejected;
        };
        self.begin_close(id);
        SubmitOutcome::Accepted { query }
    }

    /// Copy a suggestion label into the input and submit it.
    pub fn pick_suggestion(&mut self, id: u64, label: &str) -> SubmitOutcome {
        self.set_query(id, label);
        self.submit(id)
    }

    /// Start the close transition. Returns `true` when the caller should
    /// schedule a detach for `id`.
    pub fn begin_close(&mut self, id: u64) -> bool {
        match self.get_mut(id) {
            Some(m) => {
                m.visible = false;
                true
            }
            None => false,
        }
    }

    /// Drop the modal if it is still `id`.
    pub fn detach(&mut self, id: u64) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.modal = None;
        true
    }

    fn get(&self, id: u64) -> Option<&SearchModal> {
        self.modal.as_ref().filter(|m| m.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut SearchModal> {
        self.modal.as_mut().filter(|m| m.id == id)
    }
}

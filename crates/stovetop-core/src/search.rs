//! Dish search over a locally cached recipe index.
//!
//! The index is fetched once when the search is mounted; every keystroke is
//! then filtered in memory. If the index cannot be loaded the search stays
//! usable but finds nothing, and [`IndexState::Unavailable`] lets callers
//! tell that apart from "no matches".
//!
//! ```rust
//! use stovetop_core::{models::RecipeSummary, search::DishSearch};
//!
//! let mut search = DishSearch::with_index(vec![RecipeSummary {
//!     id: "a".to_string(),
//!     name: "Paneer Butter Masala".to_string(),
//!     ..Default::default()
//! }]);
//!
//! assert_eq!(search.set_query("paneer").len(), 1);
//! assert!(search.set_query("dal").is_empty());
//! ```

use log::{debug, warn};

use crate::{
    models::RecipeSummary,
    store::RecipeStore,
};

/// Load state of the recipe index.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum IndexState {
    /// The index has not been fetched yet
    #[default]
    Loading,
    /// The index is held in memory, ordered by name
    Ready(Vec<RecipeSummary>),
    /// Fetching failed; searches find nothing
    Unavailable,
}

impl IndexState {
    /// The loaded entries, empty unless `Ready`.
    pub fn entries(&self) -> &[RecipeSummary] {
        match self {
            Self::Ready(index) => index,
            Self::Loading | Self::Unavailable => &[],
        }
    }
}

/// Observable phase of the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Waiting for the index
    Loading,
    /// Idle, suggestion list closed
    Ready,
    /// Suggestion list open for a non-empty query
    Filtering,
}

/// Entries of `index` whose name or variation contains `query`,
/// case-insensitively, in index order.
pub fn filter_index(index: &[RecipeSummary], query: &str) -> Vec<RecipeSummary> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    index
        .iter()
        .filter(|entry| entry.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Search box state: cached index, current query and suggestion list.
#[derive(Debug, Clone, Default)]
pub struct DishSearch {
    index: IndexState,
    query: String,
    suggestions: Vec<RecipeSummary>,
    open: bool,
}

impl DishSearch {
    /// A search waiting for its index.
    pub fn new() -> Self {
        Self::default()
    }

    /// A search over an already loaded index.
    pub fn with_index(index: Vec<RecipeSummary>) -> Self {
        let mut search = Self::new();
        search.set_index(IndexState::Ready(index));
        search
    }

    /// Fetches the index from `store`.
    ///
    /// A failed fetch leaves the search in [`IndexState::Unavailable`] rather
    /// than returning an error.
    pub async fn load(&mut self, store: &dyn RecipeStore) -> &IndexState {
        self.index = IndexState::Loading;
        let state = match store.list().await {
            Ok(index) => {
                debug!("Recipe index loaded with {} entries", index.len());
                IndexState::Ready(index)
            }
            Err(e) => {
                warn!("Failed to load recipe index: {e}");
                IndexState::Unavailable
            }
        };
        self.set_index(state);
        &self.index
    }

    /// Replaces the index and re-applies the current query.
    pub fn set_index(&mut self, state: IndexState) {
        self.index = state;
        self.refilter();
    }

    /// Updates the query and returns the new suggestion list.
    pub fn set_query(&mut self, query: impl Into<String>) -> &[RecipeSummary] {
        self.query = query.into();
        self.refilter();
        self.suggestions()
    }

    fn refilter(&mut self) {
        self.suggestions = filter_index(self.index.entries(), &self.query);
        self.open = !self.query.is_empty();
    }

    /// Picks the suggestion at `position` (0-based), clearing the query and
    /// closing the list. `None` if the list is closed or the position is out
    /// of range.
    pub fn select(&mut self, position: usize) -> Option<RecipeSummary> {
        if !self.open {
            return None;
        }
        let chosen = self.suggestions.get(position).cloned()?;
        self.query.clear();
        self.suggestions.clear();
        self.open = false;
        Some(chosen)
    }

    /// Closes the suggestion list without touching the query.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Visible suggestions; empty while the list is closed.
    pub fn suggestions(&self) -> &[RecipeSummary] {
        if self.open {
            &self.suggestions
        } else {
            &[]
        }
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the suggestion list is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Load state of the index.
    pub fn index(&self) -> &IndexState {
        &self.index
    }

    /// Current phase of the search box.
    pub fn phase(&self) -> SearchPhase {
        match (&self.index, self.open) {
            (IndexState::Loading, _) => SearchPhase::Loading,
            (_, true) => SearchPhase::Filtering,
            (_, false) => SearchPhase::Ready,
        }
    }
}

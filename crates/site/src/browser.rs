//! Catalog browser state and its reducer.
//!
//! The sidebar, search box, and grid all dispatch [`BrowserAction`] values; [`reduce_browser`]
//! is the only place browser state changes. Filtering never clears the selection, so the detail
//! pane keeps showing a component even after it drops out of the visible results.

use catalog_contract::{ComponentDescriptor, DescriptorId};
use catalog_registry::{CatalogQuery, ComponentRegistry};
use thiserror::Error;

/// Sidebar label for the unfiltered view.
pub const ALL_CATEGORIES_LABEL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Category filter, search text, and selected component.
pub struct BrowserState {
    /// Active category filter; `None` shows every category.
    pub category: Option<String>,
    /// Raw search box text.
    pub query: String,
    /// Component shown in the detail pane.
    pub selected: Option<DescriptorId>,
}

impl BrowserState {
    /// Registry query for the current filters.
    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery {
            category: self.category.clone(),
            text: self.query.clone(),
        }
    }

    /// Visible grid entries in registry order.
    pub fn results(&self, registry: &ComponentRegistry) -> Vec<ComponentDescriptor> {
        registry.query(&self.catalog_query())
    }

    /// Descriptor for the current selection.
    pub fn selected_descriptor(&self, registry: &ComponentRegistry) -> Option<ComponentDescriptor> {
        self.selected.and_then(|id| registry.get(id).cloned())
    }

    /// Returns `true` when any filter is active.
    pub fn is_filtered(&self) -> bool {
        self.category.is_some() || !self.query.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Browser state transitions.
pub enum BrowserAction {
    /// Filter by category; `None` clears the filter.
    SelectCategory(Option<String>),
    /// Replace the search text.
    SetQuery(String),
    /// Clear both filters.
    ResetFilters,
    /// Show a component in the detail pane.
    SelectComponent(DescriptorId),
    /// Close the detail pane.
    ClearSelection,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected browser actions.
pub enum BrowserError {
    /// The requested component is not in the registry.
    #[error("component {0} is not in the catalog")]
    UnknownComponent(DescriptorId),
}

/// Applies `action` to `state`.
///
/// # Errors
///
/// Returns [`BrowserError::UnknownComponent`] when selecting an id the registry does not hold;
/// `state` is left unchanged.
pub fn reduce_browser(
    state: &mut BrowserState,
    registry: &ComponentRegistry,
    action: BrowserAction,
) -> Result<(), BrowserError> {
    match action {
        BrowserAction::SelectCategory(category) => state.category = category,
        BrowserAction::SetQuery(query) => state.query = query,
        BrowserAction::ResetFilters => {
            state.category = None;
            state.query.clear();
        }
        BrowserAction::SelectComponent(id) => {
            if registry.get(id).is_none() {
                return Err(BrowserError::UnknownComponent(id));
            }
            state.selected = Some(id);
        }
        BrowserAction::ClearSelection => state.selected = None,
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One sidebar row.
pub struct SidebarEntry {
    /// Row label.
    pub label: String,
    /// Filter the row applies.
    pub category: Option<String>,
    /// Number of components behind the row.
    pub count: usize,
}

/// Sidebar rows: "All" first, then every category in sorted order.
pub fn sidebar_entries(registry: &ComponentRegistry) -> Vec<SidebarEntry> {
    let mut entries = vec![SidebarEntry {
        label: ALL_CATEGORIES_LABEL.to_string(),
        category: None,
        count: registry.len(),
    }];
    entries.extend(
        registry
            .category_counts()
            .into_iter()
            .map(|count| SidebarEntry {
                label: count.category.clone(),
                category: Some(count.category),
                count: count.count,
            }),
    );
    entries
}

/// Result summary under the search box.
pub fn results_summary(state: &BrowserState, visible: usize, total: usize) -> String {
    let noun = |count: usize| if count == 1 { "component" } else { "components" };
    if state.is_filtered() {
        format!("{visible} of {total} {}", noun(total))
    } else {
        format!("{visible} {}", noun(visible))
    }
}

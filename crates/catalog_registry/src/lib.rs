//! Read-only component registry and its query surface.
//!
//! The registry is assembled once from per-feature descriptor lists and never mutated
//! afterwards. Every query is a total function over the in-memory list: unknown categories and
//! unmatched searches yield empty results rather than errors, and results always keep authored
//! (insertion) order.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::collections::{BTreeMap, BTreeSet, HashSet};

use catalog_contract::{ComponentDescriptor, DescriptorId};
use thiserror::Error;

/// Registry assembly failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two descriptors share an id.
    #[error("duplicate descriptor id {id}: `{first}` and `{second}`")]
    DuplicateId {
        /// Conflicting id.
        id: DescriptorId,
        /// Name of the descriptor registered first.
        first: String,
        /// Name of the rejected descriptor.
        second: String,
    },
}

/// Combined sidebar + search box filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Exact category filter; `None` means every category.
    pub category: Option<String>,
    /// Free-text filter; blank means no text filter.
    pub text: String,
}

impl CatalogQuery {
    /// Query with only a category filter.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            text: String::new(),
        }
    }

    /// Query with only a text filter.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            category: None,
            text: text.into(),
        }
    }
}

/// Sidebar entry: category label with its entry count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    /// Category label.
    pub category: String,
    /// Number of descriptors in the category.
    pub count: usize,
}

/// The canonical descriptor list.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    entries: Vec<ComponentDescriptor>,
}

impl ComponentRegistry {
    /// Concatenates per-feature descriptor lists in the given order.
    ///
    /// Fails when an id appears twice anywhere across the lists.
    pub fn assemble<I>(sections: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = ComponentDescriptor>,
    {
        let mut entries = Vec::<ComponentDescriptor>::new();
        let mut seen = HashSet::<DescriptorId>::new();

        for descriptor in sections.into_iter().flatten() {
            if !seen.insert(descriptor.id()) {
                let first = entries
                    .iter()
                    .find(|existing| existing.id() == descriptor.id())
                    .map(|existing| existing.name().to_string())
                    .unwrap_or_default();
                return Err(RegistryError::DuplicateId {
                    id: descriptor.id(),
                    first,
                    second: descriptor.name().to_string(),
                });
            }
            entries.push(descriptor);
        }

        Ok(Self { entries })
    }

    /// Every descriptor in insertion order.
    pub fn all(&self) -> &[ComponentDescriptor] {
        &self.entries
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no descriptors were registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up one descriptor by id.
    pub fn get(&self, id: DescriptorId) -> Option<&ComponentDescriptor> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Distinct category labels, sorted lexicographically.
    pub fn categories(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.category())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Sorted categories with their entry counts.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        let mut counts = BTreeMap::<&str, usize>::new();
        for entry in &self.entries {
            *counts.entry(entry.category()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect()
    }

    /// Descriptors in `category`; `None` returns everything.
    pub fn by_category(&self, category: Option<&str>) -> Vec<ComponentDescriptor> {
        self.entries
            .iter()
            .filter(|entry| category.map_or(true, |wanted| entry.category() == wanted))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over name, description, and tags.
    ///
    /// A blank query returns everything.
    pub fn search(&self, query: &str) -> Vec<ComponentDescriptor> {
        self.query(&CatalogQuery::text(query))
    }

    /// Applies a category filter and a text filter together.
    pub fn query(&self, query: &CatalogQuery) -> Vec<ComponentDescriptor> {
        let needle = normalize_needle(&query.text);
        self.entries
            .iter()
            .filter(|entry| {
                query
                    .category
                    .as_deref()
                    .map_or(true, |wanted| entry.category() == wanted)
            })
            .filter(|entry| needle.as_deref().map_or(true, |needle| entry.matches_text(needle)))
            .cloned()
            .collect()
    }
}

fn normalize_needle(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

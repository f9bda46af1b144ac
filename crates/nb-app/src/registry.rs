//! # Category Registry
//!
//! Ordered, case-sensitive set of category labels. Insertion order is
//! meaningful: it drives the chip list and the create-form selector.

use std::sync::Arc;

use nb_core::error::{AppError, Result};
use nb_core::seed::{default_categories, CATEGORIES_KEY};
use nb_core::traits::KvStore;

pub struct CategoryRegistry {
    store: Arc<dyn KvStore>,
    categories: Vec<String>,
}

impl CategoryRegistry {
    /// Loads the persisted labels or falls back to the built-in five.
    pub fn initialize(store: Arc<dyn KvStore>) -> Self {
        let categories = store
            .load(CATEGORIES_KEY)
            .and_then(|text| match serde_json::from_str::<Vec<String>>(&text) {
                Ok(list) => Some(list),
                Err(e) => {
                    log::warn!("categories entry malformed, using defaults: {e}");
                    None
                }
            })
            .unwrap_or_else(default_categories);
        Self { store, categories }
    }

    pub fn all(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn first(&self) -> Option<&String> {
        self.categories.first()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    /// Appends a trimmed label. Empty input and exact duplicates are
    /// rejected with no partial mutation.
    pub fn add(&mut self, label: &str) -> Result<()> {
        let label = label.trim();
        if label.is_empty() {
            return Err(AppError::Validation("分类名称不能为空".to_string()));
        }
        if self.contains(label) {
            return Err(AppError::Conflict(format!("分类已存在: {label}")));
        }
        self.categories.push(label.to_string());
        self.persist();
        Ok(())
    }

    /// Exact-match removal. Notices already tagged with the label keep
    /// it; removal never cascades. Returns whether anything was removed.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c != label);
        let removed = self.categories.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    fn persist(&self) {
        match serde_json::to_string(&self.categories) {
            Ok(json) => {
                if let Err(e) = self.store.save(CATEGORIES_KEY, &json) {
                    log::warn!("failed to persist categories: {e}");
                }
            }
            Err(e) => log::warn!("failed to encode categories: {e}"),
        }
    }
}

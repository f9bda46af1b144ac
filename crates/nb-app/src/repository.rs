//! # Notice Repository
//!
//! The single source of truth for the session's notice collection.
//! Every successful mutation is followed by a full-snapshot write to the
//! store — an explicit mutate-then-persist pair, no hidden watchers.

use std::sync::Arc;

use nb_core::error::{AppError, Result};
use nb_core::models::Notice;
use nb_core::seed::{initial_notices, NOTICES_KEY};
use nb_core::traits::KvStore;

const INCOMPLETE_NOTICE: &str = "请填写完整内容";

pub struct NoticeRepository {
    store: Arc<dyn KvStore>,
    notices: Vec<Notice>,
}

impl NoticeRepository {
    /// Loads the persisted collection, seeding the built-in samples when
    /// the entry is absent or does not decode. A failed load can never
    /// yield an empty board — only explicit deletions can.
    pub fn initialize(store: Arc<dyn KvStore>) -> Self {
        let notices = store
            .load(NOTICES_KEY)
            .and_then(|text| match serde_json::from_str::<Vec<Notice>>(&text) {
                Ok(list) => Some(list),
                Err(e) => {
                    log::warn!("notices entry malformed, falling back to seed data: {e}");
                    None
                }
            })
            .unwrap_or_else(initial_notices);
        Self { store, notices }
    }

    pub fn all(&self) -> &[Notice] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Notice> {
        self.notices.iter().find(|n| n.id == id)
    }

    /// Validates, stamps identity/time, prepends, persists.
    ///
    /// Title and content must be non-empty after trimming; the category
    /// label is taken as given (the controller resolves it against the
    /// registry before calling).
    pub fn create(
        &mut self,
        title: &str,
        content: &str,
        category: &str,
        author: &str,
    ) -> Result<Notice> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(AppError::Validation(INCOMPLETE_NOTICE.to_string()));
        }
        let notice = Notice::new(
            title.to_string(),
            content.to_string(),
            category.to_string(),
            author.to_string(),
        );
        self.notices.insert(0, notice.clone());
        self.persist();
        Ok(notice)
    }

    /// Removes the matching record, if any. Irreversible: no undo, no
    /// soft-delete — callers must have obtained explicit confirmation
    /// before getting here. Returns whether a record was removed; an
    /// unknown id is a no-op, not an error.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        let removed = self.notices.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Full-snapshot write of the current collection. A write failure is
    /// logged and swallowed: the in-memory state stays authoritative and
    /// the worst case is falling back to defaults on the next launch.
    fn persist(&self) {
        match serde_json::to_string(&self.notices) {
            Ok(json) => {
                if let Err(e) = self.store.save(NOTICES_KEY, &json) {
                    log::warn!("failed to persist notices: {e}");
                }
            }
            Err(e) => log::warn!("failed to encode notices: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nb_store_memory::MemoryStore;

    fn fresh() -> NoticeRepository {
        NoticeRepository::initialize(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn initialize_seeds_when_store_is_empty() {
        let repo = fresh();
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn initialize_recovers_from_malformed_entry() {
        let store = Arc::new(MemoryStore::new());
        store.save(NOTICES_KEY, "{not json").unwrap();
        let repo = NoticeRepository::initialize(store);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn create_assigns_unique_ids() {
        let mut repo = fresh();
        let a = repo.create("通知一", "内容", "健康关爱", "政治处").unwrap();
        let b = repo.create("通知二", "内容", "健康关爱", "政治处").unwrap();
        assert_ne!(a.id, b.id);
        let seeds: Vec<_> = repo.all().iter().skip(2).map(|n| &n.id).collect();
        assert!(!seeds.contains(&&a.id) && !seeds.contains(&&b.id));
    }

    #[test]
    fn create_prepends_new_notice() {
        let mut repo = fresh();
        let n = repo.create("新通知", "正文", "生活福利", "管理中心").unwrap();
        assert_eq!(repo.all()[0].id, n.id);
    }

    #[test]
    fn create_rejects_blank_title_or_content() {
        let mut repo = fresh();
        let before = repo.len();
        assert!(matches!(
            repo.create("体检通知", "   ", "健康关爱", "x"),
            Err(AppError::Validation(_))
        ));
        assert!(repo.create("  ", "正文", "健康关爱", "x").is_err());
        assert_eq!(repo.len(), before);
    }

    #[test]
    fn create_persists_snapshot() {
        let store = Arc::new(MemoryStore::new());
        let mut repo = NoticeRepository::initialize(store.clone());
        repo.create("新通知", "正文", "生活福利", "管理中心").unwrap();
        let reloaded = NoticeRepository::initialize(store);
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.all()[0].title, "新通知");
    }

    #[test]
    fn delete_removes_and_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut repo = NoticeRepository::initialize(store.clone());
        let id = repo.all()[0].id.clone();
        assert!(repo.delete(&id));
        assert!(repo.find(&id).is_none());
        let reloaded = NoticeRepository::initialize(store);
        assert!(reloaded.find(&id).is_none());
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let mut repo = fresh();
        let before: Vec<_> = repo.all().to_vec();
        assert!(!repo.delete("missing"));
        assert_eq!(repo.all(), before.as_slice());
    }

    #[test]
    fn deleting_everything_stays_empty_across_reload() {
        let store = Arc::new(MemoryStore::new());
        let mut repo = NoticeRepository::initialize(store.clone());
        for id in repo.all().iter().map(|n| n.id.clone()).collect::<Vec<_>>() {
            repo.delete(&id);
        }
        assert!(repo.is_empty());
        // An explicitly emptied board must not be re-seeded.
        let reloaded = NoticeRepository::initialize(store);
        assert!(reloaded.is_empty());
    }
}

//! # View Controller
//!
//! `BoardApp` owns navigation state and form drafts; the canonical data
//! lives in the repository, registry, and session gate it holds. The
//! presentation layer calls the action methods here and re-renders from
//! the accessors after each one.
//!
//! Guards are total: every transition into `Admin`/`Create` verifies the
//! session, and [`BoardApp::view`] re-applies the guards at read time, so
//! poking the raw state can never land an anonymous caller on an admin
//! view or render a detail page with nothing selected.

use std::sync::Arc;

use nb_core::error::{AppError, Result};
use nb_core::filter::filter_notices;
use nb_core::models::{AppView, Notice, User};
use nb_core::seed::{ALL_CATEGORIES, FALLBACK_AUTHOR};
use nb_core::traits::{AuthProvider, KvStore};

use crate::registry::CategoryRegistry;
use crate::repository::NoticeRepository;
use crate::session::SessionGate;

const NEEDS_LOGIN: &str = "请先登录管理员账号";

/// Login form draft; exists only while the login view is active.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Create-notice form draft.
#[derive(Debug, Clone, Default)]
pub struct NoticeForm {
    pub title: String,
    pub content: String,
    pub category: String,
}

pub struct BoardApp {
    repo: NoticeRepository,
    registry: CategoryRegistry,
    session: SessionGate,
    view: AppView,
    selected: Option<Notice>,
    search_query: String,
    active_category: String,
    login_form: LoginForm,
    notice_form: NoticeForm,
}

impl BoardApp {
    /// Assembles the application root: initializes all three stateful
    /// components from the store and starts on the public home view.
    pub fn new(store: Arc<dyn KvStore>, auth: Box<dyn AuthProvider>) -> Self {
        let repo = NoticeRepository::initialize(store.clone());
        let registry = CategoryRegistry::initialize(store.clone());
        let session = SessionGate::restore(store, auth);
        let notice_form = NoticeForm {
            category: registry.first().cloned().unwrap_or_default(),
            ..NoticeForm::default()
        };
        Self {
            repo,
            registry,
            session,
            view: AppView::Home,
            selected: None,
            search_query: String::new(),
            active_category: ALL_CATEGORIES.to_string(),
            login_form: LoginForm::default(),
            notice_form,
        }
    }

    // ── Rendering state ─────────────────────────────────────────────

    /// The view the presentation layer must render, with guards applied:
    /// detail without a selection falls back to home, and admin/create
    /// without a session redirect to login.
    pub fn view(&self) -> AppView {
        match self.view {
            AppView::Detail if self.selected.is_none() => AppView::Home,
            AppView::Admin | AppView::Create if !self.session.is_authenticated() => AppView::Login,
            v => v,
        }
    }

    /// The filtered, newest-first list for the home view. Recomputed on
    /// demand from the current collection, query, and chip.
    pub fn visible_notices(&self) -> Vec<Notice> {
        filter_notices(self.repo.all(), &self.search_query, &self.active_category)
    }

    /// Chip row for the home view: the match-everything sentinel first,
    /// then the registry labels in order.
    pub fn filter_chips(&self) -> Vec<String> {
        let mut chips = vec![ALL_CATEGORIES.to_string()];
        chips.extend(self.registry.all().iter().cloned());
        chips
    }

    pub fn selected_notice(&self) -> Option<&Notice> {
        self.selected.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current()
    }

    pub fn notices(&self) -> &[Notice] {
        self.repo.all()
    }

    pub fn categories(&self) -> &[String] {
        self.registry.all()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login_form
    }

    pub fn notice_form(&self) -> &NoticeForm {
        &self.notice_form
    }

    pub fn notice_form_mut(&mut self) -> &mut NoticeForm {
        &mut self.notice_form
    }

    // ── Home: search & filter ───────────────────────────────────────

    /// Retained across navigation; an empty string matches everything.
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    pub fn set_active_category(&mut self, category: &str) {
        self.active_category = category.to_string();
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Selecting a notice from any list opens the detail view. Unknown
    /// ids leave the state untouched.
    pub fn open_notice(&mut self, id: &str) -> bool {
        match self.repo.find(id) {
            Some(n) => {
                self.selected = Some(n.clone());
                self.view = AppView::Detail;
                true
            }
            None => false,
        }
    }

    pub fn back_home(&mut self) {
        self.selected = None;
        self.view = AppView::Home;
    }

    pub fn open_login(&mut self) {
        self.login_form = LoginForm::default();
        self.view = AppView::Login;
    }

    pub fn cancel_login(&mut self) {
        self.login_form = LoginForm::default();
        self.view = AppView::Home;
    }

    /// Direct navigation to the management view; anonymous callers are
    /// redirected to login instead.
    pub fn open_admin(&mut self) {
        self.view = if self.session.is_authenticated() {
            AppView::Admin
        } else {
            AppView::Login
        };
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Submits the login draft. Success lands on the admin view and
    /// clears the draft; failure stays on the login view with the error
    /// surfaced as a blocking message.
    pub fn submit_login(&mut self) -> Result<User> {
        let user = self
            .session
            .login(&self.login_form.username, &self.login_form.password)?;
        self.login_form = LoginForm::default();
        self.view = AppView::Admin;
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.view = AppView::Home;
    }

    // ── Admin: notices ──────────────────────────────────────────────

    /// Opens the create form with a reset draft: empty title/content and
    /// the first available category preselected.
    pub fn open_create(&mut self) {
        if !self.session.is_authenticated() {
            self.view = AppView::Login;
            return;
        }
        self.notice_form = NoticeForm {
            category: self.registry.first().cloned().unwrap_or_default(),
            ..NoticeForm::default()
        };
        self.view = AppView::Create;
    }

    pub fn cancel_create(&mut self) {
        self.notice_form = NoticeForm {
            category: self.registry.first().cloned().unwrap_or_default(),
            ..NoticeForm::default()
        };
        self.view = AppView::Admin;
    }

    /// Publishes the draft. The category must be a current registry
    /// label; a blank or stale draft value falls back to the first one.
    /// On success the draft resets and navigation lands on admin; the
    /// returned notice doubles as the success confirmation.
    pub fn submit_notice(&mut self) -> Result<Notice> {
        if !self.session.is_authenticated() {
            return Err(AppError::Unauthorized(NEEDS_LOGIN.to_string()));
        }
        let category = if self.registry.contains(&self.notice_form.category) {
            self.notice_form.category.clone()
        } else {
            self.registry
                .first()
                .cloned()
                .unwrap_or_else(|| self.notice_form.category.clone())
        };
        let author = self
            .session
            .current()
            .map(|u| u.username.clone())
            .unwrap_or_else(|| FALLBACK_AUTHOR.to_string());
        let notice = self.repo.create(
            &self.notice_form.title,
            &self.notice_form.content,
            &category,
            &author,
        )?;
        self.notice_form = NoticeForm {
            category: self.registry.first().cloned().unwrap_or_default(),
            ..NoticeForm::default()
        };
        self.view = AppView::Admin;
        Ok(notice)
    }

    /// Deletes a notice from the admin list. `confirmed` carries the
    /// explicit user confirmation: without it nothing happens. Returns
    /// whether a record was removed; the view stays on admin.
    pub fn delete_notice(&mut self, id: &str, confirmed: bool) -> Result<bool> {
        if !self.session.is_authenticated() {
            return Err(AppError::Unauthorized(NEEDS_LOGIN.to_string()));
        }
        if !confirmed {
            return Ok(false);
        }
        let removed = self.repo.delete(id);
        // Keep the detail payload consistent if the open notice died.
        if let Some(sel) = &self.selected {
            if sel.id == id && removed {
                self.selected = None;
            }
        }
        Ok(removed)
    }

    // ── Admin: categories ───────────────────────────────────────────

    pub fn add_category(&mut self, label: &str) -> Result<()> {
        if !self.session.is_authenticated() {
            return Err(AppError::Unauthorized(NEEDS_LOGIN.to_string()));
        }
        self.registry.add(label)
    }

    /// Removal never cascades: notices tagged with the label keep it.
    pub fn remove_category(&mut self, label: &str) -> Result<bool> {
        if !self.session.is_authenticated() {
            return Err(AppError::Unauthorized(NEEDS_LOGIN.to_string()));
        }
        Ok(self.registry.remove(label))
    }
}

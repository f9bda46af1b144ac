//! # nb-app
//!
//! The stateful orchestration layer: repositories over the `KvStore`
//! port, the session gate over the `AuthProvider` port, and the view
//! controller that ties them to a presentation layer.

pub mod controller;
pub mod registry;
pub mod repository;
pub mod session;

pub use controller::{BoardApp, LoginForm, NoticeForm};
pub use registry::CategoryRegistry;
pub use repository::NoticeRepository;
pub use session::SessionGate;

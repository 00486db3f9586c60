//! Managers Domain
//!
//! Farm managers. Projects link to managers many-to-many through `project_managers`.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ManagerError, ManagerResult};
pub use models::{CreateManager, Manager, UpdateManager};
pub use postgres::PgManagerRepository;
pub use repository::{InMemoryManagerRepository, ManagerRepository};
pub use service::ManagerService;

//! Projects Domain
//!
//! The aggregate root. A project links one customer, many managers, many investors
//! and many fields (each with lots).
//!
//! ```text
//! create_project
//!   customer (id == 0) ─► managers (id == 0) ─► investors (id == 0) ─► fields ─► persist
//!        ▲                      ▲                      ▲                  │         │
//!        └──────────────────────┴── compensating deletes on failure ──────┴─────────┘
//! ```
//!
//! Persisting the project row and its association rows is one transaction in
//! [`PgProjectRepository`]. Everything before it goes through the child services
//! ([`ports`]) and is undone through them when a later step fails.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod ports;
pub mod postgres;
pub mod repository;
pub mod saga;
pub mod service;

pub use error::{ProjectError, ProjectResult};
pub use models::{CreateProject, Project, ProjectRecord, UpdateProject};
pub use ports::{CustomerPort, FieldPort, InvestorPort, ManagerPort};
pub use postgres::PgProjectRepository;
pub use repository::{InMemoryProjectRepository, ProjectRepository};
pub use saga::{CompensationFailure, Step};
pub use service::ProjectService;

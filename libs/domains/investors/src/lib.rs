//! Investors Domain
//!
//! Capital contributors. Projects link to investors many-to-many through
//! `project_investors`.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{InvestorError, InvestorResult};
pub use models::{CreateInvestor, Investor, UpdateInvestor};
pub use postgres::PgInvestorRepository;
pub use repository::{InMemoryInvestorRepository, InvestorRepository};
pub use service::InvestorService;

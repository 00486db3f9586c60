//! Customers Domain
//!
//! Customers own projects by reference. Besides CRUD the domain serves trigram name
//! suggestions through [`suggest::PgTrgmSuggester`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /public CRUD + /public/suggest, /protected
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐      ┌─────────────┐
//! │   Service   │─────▶│  Suggester  │  ← pg_trgm similarity
//! └──────┬──────┘      └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + in-memory / Postgres
//! └─────────────┘
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod suggest;

pub use error::{CustomerError, CustomerResult};
pub use models::{CreateCustomer, Customer, SuggestQuery, UpdateCustomer};
pub use postgres::PgCustomerRepository;
pub use repository::{CustomerRepository, InMemoryCustomerRepository};
pub use service::CustomerService;
pub use suggest::{PgTrgmSuggester, Suggester, SuggesterConfig, Suggestion};

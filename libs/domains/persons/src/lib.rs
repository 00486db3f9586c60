//! Persons Domain
//!
//! People and their contact details. A user account may link to one.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{PersonError, PersonResult};
pub use models::{CreatePerson, Person, UpdatePerson};
pub use postgres::PgPersonRepository;
pub use repository::{InMemoryPersonRepository, PersonRepository};
pub use service::PersonService;

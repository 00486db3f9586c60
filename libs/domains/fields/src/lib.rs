//! Fields Domain
//!
//! A field owns lots through `lots.field_id`. Creating a field also creates its nested
//! lots (undoing the partial work when one fails), and reads attach every lot whose
//! `field_id` matches by scanning the full lot list.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{FieldError, FieldResult};
pub use models::{CreateField, Field, UpdateField};
pub use postgres::PgFieldRepository;
pub use repository::{FieldRepository, InMemoryFieldRepository};
pub use service::{FieldService, LotPort};

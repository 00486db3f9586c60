//! Lots Domain
//!
//! Parcels inside a field. Each lot stores a previous and a current crop id and
//! reads come back with both crops embedded, resolved through [`CropLookup`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_crops::{CropService, InMemoryCropRepository};
//! use domain_lots::{InMemoryLotRepository, LotService};
//!
//! let crops = CropService::new(InMemoryCropRepository::new());
//! let lots = LotService::new(InMemoryLotRepository::new(), Arc::new(crops));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{LotError, LotResult};
pub use models::{CreateLot, Lot, UpdateLot};
pub use postgres::PgLotRepository;
pub use repository::{InMemoryLotRepository, LotRepository};
pub use service::{CropLookup, LotService};

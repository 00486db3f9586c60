//! Crops Domain
//!
//! Catalog of crop types. Lots reference two crops (previous and current season).
//!
//! ```rust,no_run
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_crops::{CropService, InMemoryCropRepository, handlers};
//!
//! let auth = JwtAuth::new(&JwtConfig::new("a-secret-that-is-at-least-32-chars").unwrap());
//! let service = CropService::new(InMemoryCropRepository::new());
//! let router = handlers::router(service, auth);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CropError, CropResult};
pub use models::{CreateCrop, Crop, UpdateCrop};
pub use postgres::PgCropRepository;
pub use repository::{CropRepository, InMemoryCropRepository};
pub use service::CropService;

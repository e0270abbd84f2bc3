//! # Catalog Services
//!
//! Domain-service layer for an online catalog: product listings and user
//! accounts.
//!
//! ## Layout
//!
//! - **actor_framework**: the [`Entity`](actor_framework::Entity) trait with its
//!   mapping hooks, and the in-memory [`StoreActor`](actor_framework::StoreActor)
//!   that plays the persistence collaborator
//! - **repository**: the abstract persistence interface services depend on
//! - **lifecycle**: one generic create / update / fetch / list service, with
//!   soft delete for entities that support it
//! - **services**: [`ProductService`] and [`UserService`]
//! - **app_system**: startup, shutdown and tracing setup
//!
//! Not-found outcomes are values ([`Lookup::NotFound`] or `false`), never
//! errors. Only malformed identifiers and store failures produce
//! [`ServiceError`].

pub mod actor_framework;
pub mod app_system;
pub mod config;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod product_actor;
pub mod repository;
pub mod services;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, CatalogSystem};
pub use config::AppConfig;
pub use error::{ServiceError, StoreError};
pub use lifecycle::{parse_id, Lookup};
pub use services::{ProductService, UserService};

//! Infrastructure Database Layer
//!
//! PostgreSQL access for the nippo service using SQLx. The service only
//! reads: every repository method issues exactly one query with its filter,
//! ordering and limit expressed in SQL.
//!
//! # Architecture
//!
//! Repositories map rows to plain row structs. The adapter in [`adapters`]
//! converts those rows into domain models and implements the
//! `domain_delivery` port traits on top of them.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PostgresDeliveryAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/nippo")).await?;
//! let adapter = PostgresDeliveryAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
pub use adapters::PostgresDeliveryAdapter;

//! Newsroom - News content backend
//!
//! A CRUD backend for news articles, authors, tags, comments, and users.
//! The core of the crate is a generic entity data-access layer: one
//! engine implements pagination, single-field filtering, dynamic sorting,
//! and CRUD for every entity, while concrete stores supply only the
//! per-entity merge logic.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Request/response contracts and value objects
//! - **services**: Application use cases, including patch orchestration
//! - **infra**: Database, the generic store engine, entity stores
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared types (pagination, filters, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};

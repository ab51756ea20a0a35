//! zookeepr Server - HTTP REST API over the animal record store
//!
//! This crate wires the [`zookeepr`] core into an axum router:
//!
//! - **Animals**: filtered listing, lookup by id, and creation with
//!   server-assigned ids persisted to the JSON document
//! - **Pages**: the fixed HTML pages and static assets from `public/`
//! - **Health & Metrics**: liveness/readiness probes and Prometheus metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /api/animals` - List animals; `personalityTraits`, `diet`,
//!   `species` and `name` query parameters filter with AND semantics
//! - `GET /api/animals/{id}` - Get one animal, empty 404 when absent
//! - `POST /api/animals` - Create an animal; 400 with a plain-text message
//!   when the body is malformed
//! - `GET /`, `/animals`, `/zookeepers` - HTML pages
//! - `GET /health`, `/ready`, `/metrics` - Operational endpoints

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;

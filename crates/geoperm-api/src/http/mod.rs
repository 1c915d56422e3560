//! HTTP REST API endpoints.
//!
//! # Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/add-distributor` | POST | Register (or replace) a distributor |
//! | `/set-permission` | POST | Replace an existing distributor's rules |
//! | `/check-permission` | GET | Evaluate permission for a region |
//! | `/health` | GET | Liveness check |

pub mod routes;
pub mod state;

pub use routes::{create_router, create_router_with_body_limit, ApiError, DEFAULT_BODY_LIMIT};
pub use state::AppState;

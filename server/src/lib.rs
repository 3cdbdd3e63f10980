// HTTP layer for TripSync:
// - JWT issuance/verification and password hashing
// - Application configuration
// - Router, shared state, and request handlers
// - API error type mapping domain errors to HTTP statuses

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod http_server;

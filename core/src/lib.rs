// Core Gemini API functionality shared by the planner and the server:
// - API client for the generateContent endpoint
// - Request/response wire structures
// - Tolerant JSON extraction from model text
// - Configuration loading
// - Shared error types

// Export client module - API client for Gemini
pub mod client;
pub use client::*;

// Export types module - Request/response wire structures
pub mod types;
pub use types::*;

// Export extract module - JSON payload extraction from model text
pub mod extract;
pub use extract::*;

// Export config module - Provider configuration
pub mod config;
pub use config::*;

// Export errors module - Shared error types
pub mod errors;
pub use errors::*;

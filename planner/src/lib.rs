// Trip planning domain logic:
// - Domain model (trip requests, itineraries, packing lists)
// - Deterministic fallback generation
// - Prompt templates for the Gemini provider
// - The trip plan service orchestrating call -> extract -> fallback
// - Travel personality scoring

pub mod model;
pub use model::*;

pub mod fallback;
pub use fallback::*;

pub mod prompt;
pub use prompt::*;

pub mod service;
pub use service::*;

pub mod personality;
pub use personality::*;

//! The trip plan service: build prompt -> call Gemini -> extract JSON ->
//! fall back. Generation never fails outward; every provider or extraction
//! failure is converted into the deterministic fallback output.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use tripsync_core::client::GeminiClient;
use tripsync_core::config::GeminiConfig;
use tripsync_core::extract::extract_json_payload;

use crate::fallback::{build_fallback_packing, build_fallback_trip};
use crate::model::TripRequest;
use crate::prompt::{
    build_itinerary_prompt, build_packing_prompt, ITINERARY_MAX_OUTPUT_TOKENS,
    PACKING_MAX_OUTPUT_TOKENS,
};

/// Where a generated artifact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Parsed from model output. Passed through as-is: JSON that parses but
    /// does not match the documented shape is NOT corrected here.
    Model,
    /// Produced by the deterministic fallback generator.
    Fallback,
}

/// A generated artifact (itinerary or packing list) with its provenance.
#[derive(Debug, Clone)]
pub struct Generated {
    pub value: Value,
    pub source: Source,
}

impl Generated {
    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }
}

/// Result of one generation call: itinerary plus packing list.
#[derive(Debug, Clone)]
pub struct TripArtifacts {
    pub trip_plan: Generated,
    pub packing_list: Generated,
}

/// Orchestrates trip generation against the Gemini provider.
///
/// Holds no per-request state; safe to share behind an `Arc` across
/// concurrent requests.
#[derive(Debug)]
pub struct TripPlanner {
    client: Option<GeminiClient>,
}

impl TripPlanner {
    /// Build a planner. Without a provider credential every request is
    /// answered from the fallback generator.
    pub fn new(config: GeminiConfig) -> Self {
        let client = if config.has_credential() {
            match GeminiClient::new(config) {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!(error = %e, "Failed to initialize Gemini client, falling back");
                    None
                }
            }
        } else {
            info!("No Gemini API key configured, trip generation uses fallback output");
            None
        };

        Self { client }
    }

    /// Whether a provider credential is configured.
    pub fn has_provider(&self) -> bool {
        self.client.is_some()
    }

    /// Generate the itinerary and packing list for a request.
    ///
    /// The two sub-calls are independent: they run concurrently, and a
    /// failure in one never forces fallback in the other.
    pub async fn generate_trip(&self, request: &TripRequest) -> TripArtifacts {
        let (trip_plan, packing_list) = tokio::join!(
            self.generate_itinerary(request),
            self.generate_packing(request)
        );

        TripArtifacts {
            trip_plan,
            packing_list,
        }
    }

    /// Generate the day-by-day itinerary, falling back on any failure.
    pub async fn generate_itinerary(&self, request: &TripRequest) -> Generated {
        let fallback = || {
            to_json(&build_fallback_trip(
                &request.city,
                request.days,
                &request.activities,
                request.must_visit_places(),
            ))
        };

        self.generate_artifact(
            "itinerary",
            &build_itinerary_prompt(request),
            ITINERARY_MAX_OUTPUT_TOKENS,
            fallback,
        )
        .await
    }

    /// Generate the packing list, falling back on any failure.
    pub async fn generate_packing(&self, request: &TripRequest) -> Generated {
        let fallback = || to_json(&build_fallback_packing(&request.activities, request.days));

        self.generate_artifact(
            "packing list",
            &build_packing_prompt(request),
            PACKING_MAX_OUTPUT_TOKENS,
            fallback,
        )
        .await
    }

    /// One sub-call: NO_KEY / CALLING / PARSING collapse into fallback on
    /// any failure; successful extraction passes the parsed value through.
    async fn generate_artifact(
        &self,
        kind: &str,
        prompt: &str,
        max_output_tokens: i32,
        fallback: impl FnOnce() -> Value,
    ) -> Generated {
        let Some(client) = &self.client else {
            return Generated {
                value: fallback(),
                source: Source::Fallback,
            };
        };

        let text = match client.generate_text(prompt, max_output_tokens).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, kind, "Provider call failed, using fallback");
                return Generated {
                    value: fallback(),
                    source: Source::Fallback,
                };
            }
        };

        match extract_json_payload(&text) {
            Ok(value) => Generated {
                value,
                source: Source::Model,
            },
            Err(e) => {
                warn!(error = %e, kind, "Extraction failed, using fallback");
                Generated {
                    value: fallback(),
                    source: Source::Fallback,
                }
            }
        }
    }
}

// The fallback types serialize infallibly (string keys, no non-finite
// floats); Null would only appear if that invariant broke.
fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

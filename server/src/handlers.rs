//! Request handlers for the TripSync API.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use tripsync_planner::personality::{score_quiz, AnswerTag};
use tripsync_planner::TripRequest;
use tripsync_store::{NewTrip, NewUser, PersonalityStore, TripStore, UserStore};

use crate::auth::{hash_password, verify_password, AuthUser};
use crate::error::ApiError;
use crate::http_server::AppState;

// ── Auth ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserView,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.password.is_empty()
    {
        return Err(ApiError::BadRequest(
            "Name, email, and password are required".to_string(),
        ));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = state
        .users
        .create_user(NewUser {
            name: payload.name,
            email: payload.email,
            password_hash,
        })
        .await?;

    info!(user_id = %user.id, "User signed up");
    let token = state.jwt.issue(&user.id, &user.email)?;

    Ok(Json(AuthResponse {
        message: "User created successfully".to_string(),
        token,
        user: UserView {
            id: user.id,
            name: user.name,
            email: user.email,
        },
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = state
        .users
        .find_by_email(&payload.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify_password(&payload.password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.jwt.issue(&user.id, &user.email)?;
    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserView {
            id: user.id,
            name: user.name,
            email: user.email,
        },
    }))
}

// ── Trip generation ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GenerateTripRequest {
    pub city: String,
    pub days: u32,
    #[serde(default)]
    pub activities: Vec<String>,
    /// Free text from the trip form; split into place names server-side.
    #[serde(rename = "mustVisit")]
    pub must_visit: Option<String>,
    #[serde(rename = "additionalRequests")]
    pub additional_requests: Option<String>,
}

/// Split the must-visit free text on commas and newlines.
fn parse_must_visit(raw: Option<&str>) -> Option<Vec<String>> {
    let places: Vec<String> = raw?
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if places.is_empty() {
        None
    } else {
        Some(places)
    }
}

fn validate_trip_fields(city: &str, days: u32, activities: &[String]) -> Result<(), ApiError> {
    if city.trim().is_empty() {
        return Err(ApiError::BadRequest("City is required".to_string()));
    }
    if days < 1 {
        return Err(ApiError::BadRequest(
            "Trip length must be at least 1 day".to_string(),
        ));
    }
    if activities.is_empty() {
        return Err(ApiError::BadRequest(
            "At least one activity is required".to_string(),
        ));
    }
    Ok(())
}

/// Generate a trip preview. Never persists anything: saving is a separate,
/// explicit step.
pub async fn generate_trip(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<GenerateTripRequest>,
) -> Result<Json<Value>, ApiError> {
    validate_trip_fields(&payload.city, payload.days, &payload.activities)?;

    let request = TripRequest {
        city: payload.city,
        days: payload.days,
        activities: payload.activities,
        must_visit: parse_must_visit(payload.must_visit.as_deref()),
        additional_requests: payload.additional_requests,
    };

    info!(
        user = %user.email,
        city = %request.city,
        days = request.days,
        "Generating trip plan"
    );

    let artifacts = state.planner.generate_trip(&request).await;
    if artifacts.trip_plan.is_fallback() || artifacts.packing_list.is_fallback() {
        info!(user = %user.email, "Generation used fallback output");
    }

    Ok(Json(json!({
        "tripPlan": artifacts.trip_plan.value,
        "packingList": artifacts.packing_list.value,
    })))
}

// ── Saved trips ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SaveTripRequest {
    pub city: String,
    pub days: u32,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(rename = "mustVisit")]
    pub must_visit: Option<String>,
    #[serde(rename = "additionalRequests")]
    pub additional_requests: Option<String>,
    #[serde(rename = "tripPlan")]
    pub trip_plan: Value,
    #[serde(rename = "packingList")]
    pub packing_list: Value,
}

pub async fn save_trip(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SaveTripRequest>,
) -> Result<Json<Value>, ApiError> {
    validate_trip_fields(&payload.city, payload.days, &payload.activities)?;

    let record = state
        .trips
        .save_trip(NewTrip {
            user_id: user.user_id,
            city: payload.city,
            days: payload.days,
            activities: payload.activities,
            must_visit: parse_must_visit(payload.must_visit.as_deref()),
            additional_requests: payload.additional_requests,
            trip_plan: payload.trip_plan,
            packing_list: payload.packing_list,
        })
        .await?;

    info!(trip_id = %record.id, "Trip saved");
    Ok(Json(json!({
        "message": "Trip saved successfully",
        "tripId": record.id,
    })))
}

pub async fn list_trips(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let trips = state.trips.list_trips(&user.user_id).await?;
    Ok(Json(json!({ "trips": trips })))
}

pub async fn get_trip(
    State(state): State<AppState>,
    user: AuthUser,
    Path(trip_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let trip = state.trips.get_trip(&user.user_id, &trip_id).await?;
    Ok(Json(json!({ "trip": trip })))
}

pub async fn delete_trip(
    State(state): State<AppState>,
    user: AuthUser,
    Path(trip_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.trips.delete_trip(&user.user_id, &trip_id).await?;
    Ok(Json(json!({ "message": "Trip deleted successfully" })))
}

// ── Travel personality ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<AnswerTag>,
}

pub async fn submit_personality(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<QuizSubmission>,
) -> Result<Json<Value>, ApiError> {
    let profile = score_quiz(&payload.answers);
    let profile_json = serde_json::to_value(&profile)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to serialize profile: {}", e)))?;

    state
        .personality
        .upsert_result(&user.user_id, profile_json.clone())
        .await?;

    info!(user = %user.email, full_type = %profile.full_type, "Personality result stored");
    Ok(Json(profile_json))
}

pub async fn get_personality(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let record = state
        .personality
        .get_result(&user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Personality result not found".to_string()))?;

    Ok(Json(record.profile))
}

// ── Misc ───────────────────────────────────────────────────────

/// Mapping-collaborator key for the browser, plus an availability flag so
/// the client can skip map initialization when no key is configured.
pub async fn maps_key(State(state): State<AppState>) -> Json<Value> {
    let key = state.config.maps_api_key.clone().unwrap_or_default();
    Json(json!({
        "key": key,
        "available": state.config.maps_api_key.is_some(),
    }))
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    "TripSync is running"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn must_visit_splits_on_commas_and_newlines() {
        let parsed = parse_must_visit(Some("Colosseum, Trevi Fountain\nPantheon"));
        assert_eq!(
            parsed.unwrap(),
            vec!["Colosseum", "Trevi Fountain", "Pantheon"]
        );
    }

    #[test]
    fn blank_must_visit_is_none() {
        assert_eq!(parse_must_visit(None), None);
        assert_eq!(parse_must_visit(Some("")), None);
        assert_eq!(parse_must_visit(Some("  , \n ")), None);
    }

    #[test]
    fn trip_field_validation() {
        let activities = vec!["Food".to_string()];
        assert!(validate_trip_fields("Rome", 3, &activities).is_ok());
        assert!(validate_trip_fields("", 3, &activities).is_err());
        assert!(validate_trip_fields("Rome", 0, &activities).is_err());
        assert!(validate_trip_fields("Rome", 3, &[]).is_err());
    }
}

use serde::{Deserialize, Serialize};

/// What the user asked for: destination, length, and interests.
///
/// `days >= 1` and non-empty `activities` are enforced at the HTTP layer;
/// the generation core is total for any well-formed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub city: String,
    pub days: u32,
    pub activities: Vec<String>,
    #[serde(rename = "mustVisit", skip_serializing_if = "Option::is_none")]
    pub must_visit: Option<Vec<String>>,
    #[serde(rename = "additionalRequests", skip_serializing_if = "Option::is_none")]
    pub additional_requests: Option<String>,
}

impl TripRequest {
    /// The must-visit list, empty when none was given.
    pub fn must_visit_places(&self) -> &[String] {
        self.must_visit.as_deref().unwrap_or(&[])
    }
}

/// One scheduled stop within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Display time, e.g. "09:00 AM".
    pub time: String,
    pub location: String,
    pub description: String,
}

/// One day of the itinerary. Days are numbered 1..=N contiguously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub activities: Vec<ActivityItem>,
}

/// Full itinerary plus the route waypoint list in visit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub days: Vec<ItineraryDay>,
    pub locations: Vec<String>,
}

/// Named group of packing items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// Categorized packing list; category names are unique within a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingList {
    pub categories: Vec<PackingCategory>,
}

//! Fixed prompt templates for the Gemini provider. The templates ask for
//! strict JSON-only output in the documented shapes; compliance is not
//! guaranteed, which is why the extractor and fallback exist.

use crate::model::TripRequest;

/// Output-token budget for itinerary generation.
pub const ITINERARY_MAX_OUTPUT_TOKENS: i32 = 2048;

/// Output-token budget for packing-list generation.
pub const PACKING_MAX_OUTPUT_TOKENS: i32 = 1024;

/// Build the itinerary prompt for a trip request.
pub fn build_itinerary_prompt(request: &TripRequest) -> String {
    let mut prompt = format!(
        "Create a detailed {}-day trip itinerary for {}.\n\n\
         Traveler preferences: {}\n",
        request.days,
        request.city,
        request.activities.join(", ")
    );

    let must_visit = request.must_visit_places();
    if !must_visit.is_empty() {
        prompt.push_str(&format!(
            "Must-visit places to prioritize: {}\n",
            must_visit.join(", ")
        ));
    }

    if let Some(extra) = request
        .additional_requests
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        prompt.push_str(&format!("Additional requests: {}\n", extra));
    }

    prompt.push_str(
        "\nProvide day-by-day itinerary with specific locations, times, and descriptions.\n\n\
         Return ONLY valid JSON in this exact format, with no markdown fencing:\n\
         {\n\
         \x20   \"days\": [\n\
         \x20       {\n\
         \x20           \"day\": 1,\n\
         \x20           \"title\": \"Day title\",\n\
         \x20           \"activities\": [\n\
         \x20               {\n\
         \x20                   \"time\": \"09:00 AM\",\n\
         \x20                   \"location\": \"Location name\",\n\
         \x20                   \"description\": \"What to do\"\n\
         \x20               }\n\
         \x20           ]\n\
         \x20       }\n\
         \x20   ],\n\
         \x20   \"locations\": [\"Location 1\", \"Location 2\", \"Location 3\"]\n\
         }",
    );

    prompt
}

/// Build the packing-list prompt for a trip request.
pub fn build_packing_prompt(request: &TripRequest) -> String {
    format!(
        "Create a packing list for a {}-day trip to {}.\n\n\
         Activities: {}\n\n\
         Return ONLY valid JSON in this format, with no markdown fencing:\n\
         {{\n\
         \x20   \"categories\": [\n\
         \x20       {{\n\
         \x20           \"name\": \"Category name\",\n\
         \x20           \"items\": [\"item1\", \"item2\"]\n\
         \x20       }}\n\
         \x20   ]\n\
         }}",
        request.days,
        request.city,
        request.activities.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest {
            city: "Lisbon".into(),
            days: 4,
            activities: vec!["Food".into(), "Culture".into()],
            must_visit: Some(vec!["Belem Tower".into()]),
            additional_requests: Some("vegetarian restaurants".into()),
        }
    }

    #[test]
    fn itinerary_prompt_embeds_request_fields() {
        let prompt = build_itinerary_prompt(&request());
        assert!(prompt.contains("4-day trip itinerary for Lisbon"));
        assert!(prompt.contains("Food, Culture"));
        assert!(prompt.contains("Belem Tower"));
        assert!(prompt.contains("vegetarian restaurants"));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn itinerary_prompt_omits_empty_optionals() {
        let mut req = request();
        req.must_visit = None;
        req.additional_requests = Some("   ".into());
        let prompt = build_itinerary_prompt(&req);
        assert!(!prompt.contains("Must-visit"));
        assert!(!prompt.contains("Additional requests"));
    }

    #[test]
    fn packing_prompt_embeds_city_and_days() {
        let prompt = build_packing_prompt(&request());
        assert!(prompt.contains("4-day trip to Lisbon"));
        assert!(prompt.contains("\"categories\""));
    }
}

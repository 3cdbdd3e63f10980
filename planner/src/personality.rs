//! Travel personality quiz scoring and destination recommendations.
//!
//! Each quiz answer carries one tag. Tags come in four opposing pairs:
//! E/I (social energy), C/F (culture vs food interest), A/N (active vs
//! relaxed pace), S/P (scheduled vs spontaneous planning). The three
//! non-planning winners form the destination type; planning is reported
//! separately. Ties resolve toward the first letter of each pair, matching
//! the upstream `>=` comparisons.

use serde::{Deserialize, Serialize};

/// One quiz answer tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerTag {
    E,
    I,
    C,
    F,
    A,
    N,
    S,
    P,
}

/// Scored quiz result plus the recommendation catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    #[serde(rename = "destinationType")]
    pub destination_type: String,
    #[serde(rename = "planningType")]
    pub planning_type: String,
    #[serde(rename = "fullType")]
    pub full_type: String,
    pub name: String,
    pub description: String,
    pub destinations: Vec<String>,
}

/// Score a completed quiz into a personality profile.
pub fn score_quiz(answers: &[AnswerTag]) -> PersonalityProfile {
    let count = |tag: AnswerTag| answers.iter().filter(|a| **a == tag).count();

    let energy = if count(AnswerTag::E) >= count(AnswerTag::I) { 'E' } else { 'I' };
    let interest = if count(AnswerTag::C) >= count(AnswerTag::F) { 'C' } else { 'F' };
    let activity = if count(AnswerTag::A) >= count(AnswerTag::N) { 'A' } else { 'N' };
    let planning = if count(AnswerTag::S) >= count(AnswerTag::P) { 'S' } else { 'P' };

    let destination_type: String = [energy, interest, activity].iter().collect();
    let (name, description, destinations) = catalog_entry(&destination_type);

    PersonalityProfile {
        full_type: format!("{}{}", destination_type, planning),
        planning_type: planning.to_string(),
        destination_type,
        name: name.to_string(),
        description: description.to_string(),
        destinations: destinations.iter().map(|d| d.to_string()).collect(),
    }
}

/// Static recommendation catalog keyed by destination type.
fn catalog_entry(destination_type: &str) -> (&'static str, &'static str, &'static [&'static str]) {
    match destination_type {
        "ECA" => (
            "Urban Adventure Buff",
            "You thrive on the buzz of big cities and want every day packed with landmarks, neighborhoods, and things to climb.",
            &["Tokyo, Japan", "New York, USA", "Barcelona, Spain", "Istanbul, Turkey", "Mexico City, Mexico"],
        ),
        "ECN" => (
            "Leisurely Culture Lover",
            "Museums, architecture, and long cafe breaks — you like cities best at a strolling pace with company.",
            &["Paris, France", "Vienna, Austria", "Prague, Czech Republic", "Florence, Italy", "Kyoto, Japan"],
        ),
        "EFA" => (
            "Street Food Explorer",
            "You plan routes around night markets and food stalls, and you are happiest eating standing up in a crowd.",
            &["Bangkok, Thailand", "Ho Chi Minh City, Vietnam", "Marrakech, Morocco", "Naples, Italy", "Seoul, South Korea"],
        ),
        "EFN" => (
            "Social Gourmet",
            "Long shared dinners, wine regions, and lively food towns where the evening is the main event.",
            &["Lisbon, Portugal", "San Sebastian, Spain", "Bologna, Italy", "New Orleans, USA", "Melbourne, Australia"],
        ),
        "ICA" => (
            "Quiet History Trekker",
            "You would rather climb to a ruin at sunrise than queue for a rooftop bar — history on foot, ideally alone.",
            &["Athens, Greece", "Cusco, Peru", "Edinburgh, Scotland", "Luxor, Egypt", "Petra, Jordan"],
        ),
        "ICN" => (
            "Contemplative Wanderer",
            "Small historic towns, slow mornings, and galleries without crowds suit you best.",
            &["Reykjavik, Iceland", "Bruges, Belgium", "Salzburg, Austria", "Tallinn, Estonia", "Hoi An, Vietnam"],
        ),
        "IFA" => (
            "Culinary Pilgrim",
            "You travel for a specific dish and will cross a city on foot to find the right version of it.",
            &["Osaka, Japan", "Penang, Malaysia", "Oaxaca, Mexico", "Lyon, France", "Tbilisi, Georgia"],
        ),
        // IFN and any unexpected combination share the calmest profile.
        _ => (
            "Slow Food Retreater",
            "Countryside stays, local produce, and nowhere you absolutely have to be before dinner.",
            &["Tuscany, Italy", "Provence, France", "Ubud, Indonesia", "Hallstatt, Austria", "Queenstown, New Zealand"],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AnswerTag::*;

    #[test]
    fn majority_tags_win_each_axis() {
        let answers = [E, E, I, F, F, C, A, N, A, P, P, S];
        let profile = score_quiz(&answers);
        assert_eq!(profile.destination_type, "EFA");
        assert_eq!(profile.planning_type, "P");
        assert_eq!(profile.full_type, "EFAP");
        assert_eq!(profile.name, "Street Food Explorer");
        assert_eq!(profile.destinations.len(), 5);
    }

    #[test]
    fn ties_resolve_toward_the_first_letter() {
        // One of each: every axis ties, so E, C, A, S all win.
        let answers = [E, I, C, F, A, N, S, P];
        let profile = score_quiz(&answers);
        assert_eq!(profile.full_type, "ECAS");
    }

    #[test]
    fn empty_quiz_is_the_all_ties_profile() {
        let profile = score_quiz(&[]);
        assert_eq!(profile.full_type, "ECAS");
        assert_eq!(profile.name, "Urban Adventure Buff");
    }

    #[test]
    fn every_destination_type_has_a_catalog_entry() {
        for energy in [E, I] {
            for interest in [C, F] {
                for activity in [A, N] {
                    let answers = [energy, interest, activity];
                    let profile = score_quiz(&answers);
                    assert!(!profile.name.is_empty());
                    assert_eq!(profile.destinations.len(), 5);
                }
            }
        }
    }

    #[test]
    fn tags_serialize_as_bare_letters() {
        let tags: Vec<AnswerTag> = serde_json::from_str(r#"["E","F","N","P"]"#).unwrap();
        assert_eq!(tags, vec![E, F, N, P]);
    }
}

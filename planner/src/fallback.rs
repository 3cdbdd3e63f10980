//! Deterministic itinerary and packing generation used when the Gemini
//! provider is unavailable or returns unusable output. Pure and total for
//! any request with `days >= 1`; no network, no clock, no randomness.

use crate::model::{ActivityItem, ItineraryDay, PackingCategory, PackingList, TripPlan};

/// Synthesize a day-by-day itinerary.
///
/// Day titles: "Arrival in {city}" for day 1, "Final Day & Departure" for
/// the last day, "Exploring {city}" otherwise. The arrival check runs
/// first, so a single-day trip is titled as an arrival day.
///
/// Each day gets four fixed-role slots. The 09:00 slot consumes
/// `must_visit[i-1]` when one is available for that day.
///
/// `locations` is the full must-visit list when non-empty, else a fixed
/// generic placeholder list. It is NOT derived from the per-day activity
/// locations; the upstream behavior is preserved as-is.
pub fn build_fallback_trip(
    city: &str,
    days: u32,
    activities: &[String],
    must_visit: &[String],
) -> TripPlan {
    let headline_activity = activities
        .first()
        .map(String::as_str)
        .unwrap_or("sightseeing");

    let mut plan_days = Vec::with_capacity(days as usize);
    for i in 1..=days {
        let title = if i == 1 {
            format!("Arrival in {}", city)
        } else if i == days {
            "Final Day & Departure".to_string()
        } else {
            format!("Exploring {}", city)
        };

        let morning = match must_visit.get(i as usize - 1) {
            Some(place) => ActivityItem {
                time: "09:00 AM".to_string(),
                location: place.clone(),
                description: format!("Visit {}, one of your must-see stops", place),
            },
            None => ActivityItem {
                time: "09:00 AM".to_string(),
                location: format!("{} Attraction", city),
                description: "Explore a popular local attraction".to_string(),
            },
        };

        plan_days.push(ItineraryDay {
            day: i,
            title,
            activities: vec![
                morning,
                ActivityItem {
                    time: "12:00 PM".to_string(),
                    location: "Local Restaurant".to_string(),
                    description: "Lunch featuring local cuisine".to_string(),
                },
                ActivityItem {
                    time: "02:00 PM".to_string(),
                    location: "City Center".to_string(),
                    description: format!("Enjoy {}", headline_activity),
                },
                ActivityItem {
                    time: "05:00 PM".to_string(),
                    location: "Local Market".to_string(),
                    description: "Browse shops and local markets".to_string(),
                },
            ],
        });
    }

    let locations = if must_visit.is_empty() {
        vec![
            format!("{} Center", city),
            "Main Square".to_string(),
            "Local Market".to_string(),
            "Old Town".to_string(),
        ]
    } else {
        must_visit.to_vec()
    };

    TripPlan {
        days: plan_days,
        locations,
    }
}

/// Synthesize a packing list with six fixed categories.
///
/// Clothing counts scale with trip length. Activity Gear is chosen by
/// exact, case-sensitive tag membership: "Adventure" wins over "Swimming",
/// anything else gets a generic pair.
pub fn build_fallback_packing(activities: &[String], days: u32) -> PackingList {
    let has_tag = |tag: &str| activities.iter().any(|a| a == tag);

    let activity_gear = if has_tag("Adventure") {
        vec![
            "Hiking boots".to_string(),
            "Daypack".to_string(),
            "Water bottle".to_string(),
        ]
    } else if has_tag("Swimming") {
        vec![
            "Swimsuit".to_string(),
            "Beach towel".to_string(),
            "Goggles".to_string(),
        ]
    } else {
        vec!["Camera".to_string(), "Sunglasses".to_string()]
    };

    PackingList {
        categories: vec![
            PackingCategory {
                name: "Travel Documents".to_string(),
                items: vec![
                    "Passport".to_string(),
                    "Flight tickets".to_string(),
                    "Hotel confirmations".to_string(),
                    "Travel insurance documents".to_string(),
                ],
            },
            PackingCategory {
                name: "Essentials".to_string(),
                items: vec![
                    "Phone".to_string(),
                    "Charger".to_string(),
                    "Power bank".to_string(),
                    "Wallet".to_string(),
                    "Credit cards".to_string(),
                ],
            },
            PackingCategory {
                name: "Clothing".to_string(),
                items: vec![
                    format!("T-shirts ({})", days),
                    format!("Underwear ({})", days + 1),
                    "Comfortable walking shoes".to_string(),
                    "Jacket".to_string(),
                    "Sleepwear".to_string(),
                ],
            },
            PackingCategory {
                name: "Toiletries".to_string(),
                items: vec![
                    "Toothbrush & toothpaste".to_string(),
                    "Shampoo".to_string(),
                    "Sunscreen".to_string(),
                    "Deodorant".to_string(),
                ],
            },
            PackingCategory {
                name: "Activity Gear".to_string(),
                items: activity_gear,
            },
            PackingCategory {
                name: "Health & Safety".to_string(),
                items: vec![
                    "First aid kit".to_string(),
                    "Prescription medication".to_string(),
                    "Hand sanitizer".to_string(),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn day_numbers_are_contiguous_for_any_length() {
        for days in 1..=14 {
            let plan = build_fallback_trip("Lisbon", days, &tags(&["Culture"]), &[]);
            assert_eq!(plan.days.len(), days as usize);
            for (idx, day) in plan.days.iter().enumerate() {
                assert_eq!(day.day, idx as u32 + 1);
                assert_eq!(day.activities.len(), 4);
            }
        }
    }

    #[test]
    fn single_day_trip_gets_the_arrival_title() {
        let plan = build_fallback_trip("Paris", 1, &[], &[]);
        assert_eq!(plan.days[0].title, "Arrival in Paris");
    }

    #[test]
    fn titles_follow_arrival_middle_departure_shape() {
        let plan = build_fallback_trip("Rome", 3, &tags(&["Food"]), &[]);
        assert_eq!(plan.days[0].title, "Arrival in Rome");
        assert_eq!(plan.days[1].title, "Exploring Rome");
        assert_eq!(plan.days[2].title, "Final Day & Departure");
    }

    #[test]
    fn must_visit_entries_fill_the_morning_slot_in_order() {
        let must_visit = tags(&["Sagrada Familia", "Park Guell"]);
        let plan = build_fallback_trip("Barcelona", 3, &[], &must_visit);

        assert_eq!(plan.days[0].activities[0].location, "Sagrada Familia");
        assert_eq!(plan.days[1].activities[0].location, "Park Guell");
        // Day 3 has no must-visit left; generic placeholder.
        assert_eq!(plan.days[2].activities[0].location, "Barcelona Attraction");
    }

    #[test]
    fn locations_are_the_must_visit_list_when_present() {
        let must_visit = tags(&["Colosseum", "Trevi Fountain"]);
        let plan = build_fallback_trip("Rome", 2, &[], &must_visit);
        assert_eq!(plan.locations, must_visit);
    }

    #[test]
    fn locations_fall_back_to_generic_placeholders() {
        let plan = build_fallback_trip("Tokyo", 2, &[], &[]);
        assert_eq!(
            plan.locations,
            vec!["Tokyo Center", "Main Square", "Local Market", "Old Town"]
        );
    }

    #[test]
    fn first_activity_tag_drives_the_afternoon_slot() {
        let plan = build_fallback_trip("Kyoto", 1, &tags(&["Culture", "Food"]), &[]);
        assert_eq!(plan.days[0].activities[2].description, "Enjoy Culture");

        let plan = build_fallback_trip("Kyoto", 1, &[], &[]);
        assert_eq!(plan.days[0].activities[2].description, "Enjoy sightseeing");
    }

    #[test]
    fn clothing_counts_scale_with_days() {
        let packing = build_fallback_packing(&tags(&["Swimming"]), 5);
        let clothing = packing
            .categories
            .iter()
            .find(|c| c.name == "Clothing")
            .unwrap();
        assert!(clothing.items.contains(&"T-shirts (5)".to_string()));
        assert!(clothing.items.contains(&"Underwear (6)".to_string()));
    }

    #[test]
    fn swimming_tag_selects_swim_gear() {
        let packing = build_fallback_packing(&tags(&["Swimming"]), 5);
        let gear = packing
            .categories
            .iter()
            .find(|c| c.name == "Activity Gear")
            .unwrap();
        assert_eq!(gear.items, vec!["Swimsuit", "Beach towel", "Goggles"]);
    }

    #[test]
    fn adventure_takes_priority_over_swimming() {
        let packing = build_fallback_packing(&tags(&["Swimming", "Adventure"]), 3);
        let gear = packing
            .categories
            .iter()
            .find(|c| c.name == "Activity Gear")
            .unwrap();
        assert_eq!(gear.items, vec!["Hiking boots", "Daypack", "Water bottle"]);
    }

    #[test]
    fn tag_match_is_case_sensitive() {
        let packing = build_fallback_packing(&tags(&["swimming"]), 3);
        let gear = packing
            .categories
            .iter()
            .find(|c| c.name == "Activity Gear")
            .unwrap();
        assert_eq!(gear.items, vec!["Camera", "Sunglasses"]);
    }

    #[test]
    fn category_names_are_unique_and_fixed() {
        let packing = build_fallback_packing(&[], 2);
        let names: Vec<&str> = packing.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Travel Documents",
                "Essentials",
                "Clothing",
                "Toiletries",
                "Activity Gear",
                "Health & Safety"
            ]
        );
    }
}

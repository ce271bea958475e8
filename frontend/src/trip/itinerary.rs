use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Hotel {
    pub name: String,
    pub address: String,
    pub price: String,
    pub rating: f32,
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Activity {
    pub time: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub price: String,
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub activities: Vec<Activity>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Itinerary {
    pub hotels: Vec<Hotel>,
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    /// Reads the stored generation payload, falling back to the placeholder
    /// when it is missing or has another shape.
    pub fn from_response(response: &serde_json::Value) -> Self {
        serde_json::from_value(response.clone())
            .ok()
            .filter(|it: &Itinerary| !it.hotels.is_empty() || !it.days.is_empty())
            .unwrap_or_else(placeholder_itinerary)
    }

    pub fn to_response(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

fn pexels(id: &str, file: &str) -> String {
    format!(
        "https://images.pexels.com/photos/{}/{}?auto=compress&cs=tinysrgb&w=400",
        id, file
    )
}

fn hotel(name: &str, address: &str, price: &str, rating: f32, image: String) -> Hotel {
    Hotel {
        name: name.to_string(),
        address: address.to_string(),
        price: price.to_string(),
        rating,
        image,
    }
}

fn activity(time: &str, title: &str, description: &str, duration: &str, price: &str, image: String) -> Activity {
    Activity {
        time: time.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        price: price.to_string(),
        image,
    }
}

/// Fixed itinerary stored for every generated trip until a real generator
/// exists.
pub fn placeholder_itinerary() -> Itinerary {
    Itinerary {
        hotels: vec![
            hotel(
                "Grand Mountain Resort",
                "123 Mountain View Dr, Gatlinburg, TN",
                "$180/night",
                4.5,
                pexels("258154", "pexels-photo-258154.jpeg"),
            ),
            hotel(
                "Cozy Cabin Retreat",
                "456 Forest Trail, Pigeon Forge, TN",
                "$120/night",
                4.2,
                pexels("1134176", "pexels-photo-1134176.jpeg"),
            ),
            hotel(
                "Luxury Lodge & Spa",
                "789 Summit Rd, Gatlinburg, TN",
                "$250/night",
                4.8,
                pexels("271624", "pexels-photo-271624.jpeg"),
            ),
        ],
        days: vec![
            DayPlan {
                day: 1,
                activities: vec![
                    activity(
                        "9:00 AM",
                        "Cataract Falls",
                        "Beautiful waterfall hike with scenic views",
                        "2 hours",
                        "Free",
                        pexels("1029604", "pexels-photo-1029604.jpeg"),
                    ),
                    activity(
                        "2:00 PM",
                        "Dollywood Theme Park",
                        "Famous theme park with thrilling rides and shows",
                        "6 hours",
                        "$89",
                        pexels("163064", "play-stone-network-networked-interactive-163064.jpeg"),
                    ),
                ],
            },
            DayPlan {
                day: 2,
                activities: vec![
                    activity(
                        "8:00 AM",
                        "Great Smoky Mountains National Park",
                        "Explore the most visited national park in the US",
                        "4 hours",
                        "Free",
                        pexels("417074", "pexels-photo-417074.jpeg"),
                    ),
                    activity(
                        "1:00 PM",
                        "Gatlinburg SkyBridge",
                        "Longest pedestrian suspension bridge in North America",
                        "2 hours",
                        "$28",
                        pexels("1271619", "pexels-photo-1271619.jpeg"),
                    ),
                    activity(
                        "4:00 PM",
                        "Moonshine Tasting",
                        "Sample local moonshine at Sugarlands Distilling",
                        "1 hour",
                        "$15",
                        pexels("602750", "pexels-photo-602750.jpeg"),
                    ),
                ],
            },
        ],
    }
}

const COUNTRY_FLAGS: &[(&str, &str)] = &[
    ("usa", "🇺🇸"),
    ("japan", "🇯🇵"),
    ("france", "🇫🇷"),
    ("italy", "🇮🇹"),
    ("spain", "🇪🇸"),
    ("uk", "🇬🇧"),
    ("germany", "🇩🇪"),
    ("australia", "🇦🇺"),
    ("canada", "🇨🇦"),
    ("brazil", "🇧🇷"),
];

/// Flag for the first known country named as a whole word in `destination`.
pub fn country_flag(destination: &str) -> &'static str {
    let destination = destination.to_lowercase();
    destination
        .split(|c: char| !c.is_alphanumeric())
        .find_map(|word| {
            COUNTRY_FLAGS
                .iter()
                .find(|(country, _)| *country == word)
                .map(|(_, flag)| *flag)
        })
        .unwrap_or("🌍")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stored_payload_round_trips_through_trip_rows() {
        let itinerary = placeholder_itinerary();
        assert_eq!(Itinerary::from_response(&itinerary.to_response()), itinerary);
    }

    #[test]
    fn unreadable_payload_shows_placeholder() {
        assert_eq!(Itinerary::from_response(&json!(null)), placeholder_itinerary());
        assert_eq!(Itinerary::from_response(&json!({"text": "hi"})), placeholder_itinerary());
        assert_eq!(
            Itinerary::from_response(&json!({"hotels": [], "days": []})),
            placeholder_itinerary()
        );
    }

    #[test]
    fn custom_payload_is_used_as_is() {
        let payload = json!({
            "hotels": [],
            "days": [{"day": 1, "activities": []}]
        });
        let itinerary = Itinerary::from_response(&payload);
        assert!(itinerary.hotels.is_empty());
        assert_eq!(itinerary.days.len(), 1);
    }

    #[test]
    fn flags_follow_country_names() {
        assert_eq!(country_flag("Tokyo, Japan"), "🇯🇵");
        assert_eq!(country_flag("New York, NY, USA"), "🇺🇸");
        assert_eq!(country_flag("Bali, Indonesia"), "🌍");
    }

    #[test]
    fn country_codes_must_be_whole_words() {
        assert_eq!(country_flag("Phuket, Thailand"), "🌍");
        assert_eq!(country_flag("Fukuoka"), "🌍");
        assert_eq!(country_flag("Fukuoka, Japan"), "🇯🇵");
        assert_eq!(country_flag("London, UK"), "🇬🇧");
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Place {
    pub id: &'static str,
    pub main_text: &'static str,
    pub secondary_text: &'static str,
}

impl Place {
    pub fn description(&self) -> String {
        format!("{}, {}", self.main_text, self.secondary_text)
    }
}

// Stand-in for a places autocomplete service.
pub const PLACES: &[Place] = &[
    Place { id: "1", main_text: "Paris", secondary_text: "France" },
    Place { id: "2", main_text: "Tokyo", secondary_text: "Japan" },
    Place { id: "3", main_text: "New York", secondary_text: "NY, USA" },
    Place { id: "4", main_text: "London", secondary_text: "UK" },
    Place { id: "5", main_text: "Rome", secondary_text: "Italy" },
    Place { id: "6", main_text: "Barcelona", secondary_text: "Spain" },
    Place { id: "7", main_text: "Amsterdam", secondary_text: "Netherlands" },
    Place { id: "8", main_text: "Dubai", secondary_text: "UAE" },
    Place { id: "9", main_text: "Bali", secondary_text: "Indonesia" },
    Place { id: "10", main_text: "Sydney", secondary_text: "Australia" },
    Place { id: "11", main_text: "Smoky Mountains", secondary_text: "Tennessee, USA" },
    Place { id: "12", main_text: "Santorini", secondary_text: "Greece" },
];

/// Case-insensitive substring match on the full description. Empty input
/// yields no suggestions.
pub fn suggestions(query: &str) -> Vec<Place> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    PLACES
        .iter()
        .filter(|place| place.description().to_lowercase().contains(&query))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_suggestions() {
        assert!(suggestions("").is_empty());
        assert!(suggestions("   ").is_empty());
    }

    #[test]
    fn matches_city_or_country_ignoring_case() {
        let names: Vec<_> = suggestions("usa").iter().map(|p| p.main_text).collect();
        assert_eq!(names, vec!["New York", "Smoky Mountains"]);
        assert_eq!(suggestions("TOK")[0].description(), "Tokyo, Japan");
    }

    #[test]
    fn unknown_places_yield_nothing() {
        assert!(suggestions("atlantis").is_empty());
    }
}

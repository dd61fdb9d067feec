//! Static diet suggestion table.

/// Suggestions for each known diet category, in display order.
const SUGGESTION_TABLE: &[(&str, &[&str])] = &[
    (
        "gain",
        &["High-Calorie Smoothie", "Chicken Alfredo", "Peanut Butter Shake"],
    ),
    (
        "lose",
        &["Grilled Salmon Salad", "Vegetable Stir-fry", "Kale Smoothie"],
    ),
    ("balance", &["Pasta Salad", "Quinoa Bowl", "Mixed Veg Soup"]),
];

/// Look up recipe suggestions for a diet category key.
///
/// Unknown categories yield an empty slice.
#[must_use]
pub fn suggestions_for(category: &str) -> &'static [&'static str] {
    SUGGESTION_TABLE
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, suggestions)| *suggestions)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(
            suggestions_for("gain"),
            ["High-Calorie Smoothie", "Chicken Alfredo", "Peanut Butter Shake"]
        );
        assert_eq!(
            suggestions_for("lose"),
            ["Grilled Salmon Salad", "Vegetable Stir-fry", "Kale Smoothie"]
        );
        assert_eq!(
            suggestions_for("balance"),
            ["Pasta Salad", "Quinoa Bowl", "Mixed Veg Soup"]
        );
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(suggestions_for("unknown").is_empty());
        assert!(suggestions_for("Gain").is_empty());
        assert!(suggestions_for("").is_empty());
    }
}

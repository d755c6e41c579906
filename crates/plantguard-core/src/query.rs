//! Filters and orderings over whole collections
//!
//! Store implementations load a collection in insertion order and hand it
//! to these functions so every backend filters the same way.

use plantguard_types::{NewsArticle, PlantDisease, ALL_CATEGORIES};

/// Whether `category` is the sentinel that selects every disease
pub fn is_all_categories(category: &str) -> bool {
    category.eq_ignore_ascii_case(ALL_CATEGORIES)
}

/// Keep diseases with an affected plant containing `category`, ignoring case
pub fn diseases_by_category(diseases: Vec<PlantDisease>, category: &str) -> Vec<PlantDisease> {
    if is_all_categories(category) {
        return diseases;
    }
    diseases
        .into_iter()
        .filter(|disease| disease.affects(category))
        .collect()
}

/// Newest articles first, truncated to `limit`. Ties keep insertion order.
pub fn latest_news(mut articles: Vec<NewsArticle>, limit: usize) -> Vec<NewsArticle> {
    articles.sort_by(|a, b| b.published_date.cmp(&a.published_date));
    articles.truncate(limit);
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use plantguard_types::{DiseaseSeverity, NewNewsArticle, NewPlantDisease};

    fn disease(id: i32, plants: &[&str]) -> PlantDisease {
        PlantDisease::from_new(
            id,
            NewPlantDisease {
                name: format!("Disease {}", id),
                disease_type: "Fungal".to_string(),
                severity: DiseaseSeverity::Low,
                description: String::new(),
                symptoms: String::new(),
                images: vec![],
                affected_plants: plants.iter().map(|p| p.to_string()).collect(),
            },
        )
    }

    fn article(id: i32, day: u32) -> NewsArticle {
        NewsArticle::from_new(
            id,
            NewNewsArticle {
                title: format!("Article {}", id),
                description: String::new(),
                content: String::new(),
                image: String::new(),
                category: "Tips".to_string(),
                published_date: Utc.with_ymd_and_hms(2023, 6, day, 0, 0, 0).unwrap(),
            },
        )
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let diseases = vec![disease(1, &["Roses"]), disease(2, &["Tomatoes"])];
        let filtered = diseases_by_category(diseases.clone(), "All");
        assert_eq!(filtered, diseases);
        assert!(is_all_categories("all"));
    }

    #[test]
    fn test_category_substring_match() {
        let diseases = vec![
            disease(1, &["Cucumbers", "Roses"]),
            disease(2, &["Other ornamentals"]),
            disease(3, &["Tomatoes", "Potatoes"]),
        ];

        let roses = diseases_by_category(diseases.clone(), "Roses");
        assert_eq!(roses.len(), 1);
        assert_eq!(roses[0].id, 1);

        let ornamentals = diseases_by_category(diseases.clone(), "Ornamentals");
        assert_eq!(ornamentals.len(), 1);
        assert_eq!(ornamentals[0].id, 2);

        assert!(diseases_by_category(diseases, "Houseplants").is_empty());
    }

    #[test]
    fn test_latest_news_order_and_limit() {
        let articles = vec![article(1, 5), article(2, 15), article(3, 10)];

        let latest = latest_news(articles.clone(), 2);
        let ids: Vec<i32> = latest.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3]);

        assert_eq!(latest_news(articles.clone(), 10).len(), 3);
        assert!(latest_news(articles, 0).is_empty());
    }
}

//! News feed types

use crate::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of articles returned when no limit is given
pub const DEFAULT_NEWS_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub image: String,
    pub category: String,
    pub published_date: DateTime<Utc>,
}

impl NewsArticle {
    pub fn from_new(id: RecordId, new: NewNewsArticle) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            content: new.content,
            image: new.image,
            category: new.category,
            published_date: new.published_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsArticle {
    pub title: String,
    pub description: String,
    pub content: String,
    pub image: String,
    pub category: String,
    pub published_date: DateTime<Utc>,
}

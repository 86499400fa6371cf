use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A guest review. Independent of reservations; created by end users without
/// an approval step, edited and deleted only by the admin.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: String, text: String, rating: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            text,
            rating,
            created_at: Utc::now(),
        }
    }
}

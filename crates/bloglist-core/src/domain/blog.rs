use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog entity - a posted link with a like counter.
///
/// `author` is the free-text author name carried on the record itself;
/// `user_id` points at the account that created the blog, when one did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog.
    pub fn new(
        user_id: Option<Uuid>,
        title: String,
        author: Option<String>,
        url: String,
        likes: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            author,
            url,
            likes,
            created_at: now,
            updated_at: now,
        }
    }
}

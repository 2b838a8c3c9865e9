use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for an uploaded video.
///
/// `filepath` points into the local file store; nothing keeps the row and
/// the file in sync beyond the service's own delete order.
#[derive(Debug, Clone, FromRow)]
pub struct Video {
    pub id: i64,
    pub filename: String,
    pub filepath: String,
    pub uploaded_at: DateTime<Utc>,
}

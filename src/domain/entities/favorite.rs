use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A starred region. `name` is the unique key; adding an existing name is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

/**
 * Roster Records
 *
 * Team members and players as they are stored in their JSON collection files
 * and returned by the API. Field names are camelCase on the wire so existing
 * data files load unchanged.
 *
 * Records returned by the API are wrapped in `WithImageUrl`, which adds the
 * public URL of the record's image (or `null`).
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Read a display order, treating `null` (an unparsable number saved by
/// older data files) as 0
fn order_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

/// A member of the club's staff or management team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Unique ID (UUID v4 string)
    pub id: String,
    pub name: String,
    /// Role title, e.g. "Head Coach"
    pub role: String,
    #[serde(default)]
    pub bio: String,
    /// File name inside the team media directory
    #[serde(default)]
    pub image_filename: Option<String>,
    /// Display order (ascending)
    #[serde(default, deserialize_with = "order_or_zero")]
    pub order: i64,
    pub created_at: DateTime<Utc>,
    /// Unset until the first update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A player on the club's roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique ID (UUID v4 string)
    pub id: String,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub jersey_number: Option<i64>,
    #[serde(default)]
    pub bio: String,
    /// Free-form date string as entered by the admin (usually `YYYY-MM-DD`)
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: String,
    /// File name inside the player media directory
    #[serde(default)]
    pub image_filename: Option<String>,
    #[serde(default, deserialize_with = "order_or_zero")]
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A record augmented with the public URL of its image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithImageUrl<T> {
    #[serde(flatten)]
    pub record: T,
    pub image_url: Option<String>,
}

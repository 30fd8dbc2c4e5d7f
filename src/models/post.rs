use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::user::User;

/// Characters of `content` shown in the feed before truncation.
pub const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "imgUrl", default)]
    pub img_url: Option<String>,
    pub author: User,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient_timestamp_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Parses RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS[.f]` taken as UTC
/// (what the backend emits when it runs without time zone support).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(d)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp {raw:?}")))
}

fn lenient_timestamp_opt<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    match Option::<String>::deserialize(d)? {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp {raw:?}"))),
        None => Ok(None),
    }
}

impl Post {
    /// Feed excerpt: the first 200 characters, with `...` appended when cut.
    pub fn excerpt(&self) -> String {
        match self.content.char_indices().nth(EXCERPT_CHARS) {
            Some((cut, _)) => format!("{}...", &self.content[..cut]),
            None => self.content.clone(),
        }
    }

    pub fn author_initial(&self) -> String {
        self.author
            .username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Creation date as `Mon D, YYYY`.
    pub fn display_date(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }

    pub fn is_owned_by(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| u.username == self.author.username)
    }

    pub fn image(&self) -> Option<&str> {
        self.img_url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

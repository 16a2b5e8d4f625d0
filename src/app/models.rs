//! Data models for the remote catalog
//!
//! `Book` and `Country` mirror the JSON documents served by the catalog
//! endpoints. Both implement [`Listing`] so a single generic fetcher can load
//! either of them.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::EndpointConfig;
use crate::constants::time::MAX_PUBLISHED_SECS;

/// A record type served as a JSON array by one catalog endpoint
pub trait Listing: serde::de::DeserializeOwned + Send + Sync + 'static {
    /// Plural noun used in notices ("No books found")
    const NOUN: &'static str;

    /// Endpoint path for this record type
    fn endpoint_path(endpoints: &EndpointConfig) -> &str;

    /// Inspect a freshly parsed batch before it is handed out
    fn inspect_batch(_records: &[Self]) {}
}

/// Time zone used to derive calendar years from timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearZone {
    /// Coordinated Universal Time, identical on every machine
    #[default]
    Utc,
    /// The machine's local time zone
    Local,
}

impl fmt::Display for YearZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearZone::Utc => write!(f, "utc"),
            YearZone::Local => write!(f, "local"),
        }
    }
}

/// Publication timestamp in Unix seconds
///
/// Rejected at deserialization when negative or beyond year 9999, so every
/// value converts to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PublishedAt(i64);

impl PublishedAt {
    /// Seconds since the Unix epoch
    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Milliseconds since the Unix epoch
    pub fn as_millis(&self) -> i64 {
        self.0 * 1000
    }

    /// Calendar year of this timestamp in the given zone
    pub fn year(&self, zone: YearZone) -> i32 {
        let utc = self.to_utc();
        match zone {
            YearZone::Utc => utc.year(),
            YearZone::Local => Local
                .timestamp_millis_opt(self.as_millis())
                .single()
                .map(|local| local.year())
                .unwrap_or_else(|| utc.year()),
        }
    }

    fn to_utc(self) -> DateTime<Utc> {
        // Range checked in try_from
        DateTime::<Utc>::from_timestamp_millis(self.as_millis()).unwrap_or_default()
    }
}

impl TryFrom<i64> for PublishedAt {
    type Error = String;

    fn try_from(secs: i64) -> Result<Self, Self::Error> {
        if (0..=MAX_PUBLISHED_SECS).contains(&secs) {
            Ok(Self(secs))
        } else {
            Err(format!(
                "publishedChapterDate {} outside 0..={}",
                secs, MAX_PUBLISHED_SECS
            ))
        }
    }
}

impl From<PublishedAt> for i64 {
    fn from(published: PublishedAt) -> Self {
        published.0
    }
}

/// A book entry from the books endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    /// Thumbnail URL
    pub image: String,
    pub score: f64,
    pub popularity: i64,
    pub title: String,
    pub published_chapter_date: PublishedAt,
}

impl Book {
    /// Calendar year of publication in the given zone
    pub fn published_year(&self, zone: YearZone) -> i32 {
        self.published_chapter_date.year(zone)
    }
}

impl Listing for Book {
    const NOUN: &'static str = "books";

    fn endpoint_path(endpoints: &EndpointConfig) -> &str {
        &endpoints.books_path
    }

    fn inspect_batch(records: &[Self]) {
        let mut seen = HashSet::with_capacity(records.len());
        for book in records {
            if !seen.insert(book.id.as_str()) {
                warn!("Duplicate book id in batch: {}", book.id);
            }
        }
    }
}

/// A country entry from the countries endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Country name
    pub country: String,
    pub region: String,
}

impl Country {
    /// Whether this entry has a name to show in the picker
    pub fn is_displayable(&self) -> bool {
        !self.country.trim().is_empty()
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.region.is_empty() {
            write!(f, "{}", self.country)
        } else {
            write!(f, "{} ({})", self.country, self.region)
        }
    }
}

impl Listing for Country {
    const NOUN: &'static str = "countries";

    fn endpoint_path(endpoints: &EndpointConfig) -> &str {
        &endpoints.countries_path
    }

    fn inspect_batch(records: &[Self]) {
        let unnamed = records.iter().filter(|c| !c.is_displayable()).count();
        if unnamed > 0 {
            warn!("{} countries without a display name", unnamed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_deserializes_wire_names() {
        let json = r#"{
            "id": "b1",
            "image": "https://img.example/b1.png",
            "score": 4.5,
            "popularity": 120,
            "title": "First",
            "publishedChapterDate": 1609459200
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, "b1");
        assert_eq!(book.popularity, 120);
        assert_eq!(book.published_chapter_date.as_secs(), 1_609_459_200);
        assert_eq!(book.published_year(YearZone::Utc), 2021);
    }

    #[test]
    fn test_negative_timestamp_rejected() {
        let json = r#"{"id":"x","image":"","score":1.0,"popularity":1,"title":"t","publishedChapterDate":-5}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn test_far_future_timestamp_rejected() {
        assert!(PublishedAt::try_from(MAX_PUBLISHED_SECS).is_ok());
        assert!(PublishedAt::try_from(MAX_PUBLISHED_SECS + 1).is_err());
    }

    #[test]
    fn test_year_uses_millisecond_conversion() {
        let published = PublishedAt::try_from(1_577_836_800).unwrap();
        assert_eq!(published.as_millis(), 1_577_836_800_000);
        assert_eq!(published.year(YearZone::Utc), 2020);
        // One second before midnight UTC on new year's eve
        let eve = PublishedAt::try_from(1_577_836_799).unwrap();
        assert_eq!(eve.year(YearZone::Utc), 2019);
    }

    #[test]
    fn test_local_zone_year_is_adjacent() {
        let published = PublishedAt::try_from(1_577_836_800).unwrap();
        let local = published.year(YearZone::Local);
        assert!(local == 2019 || local == 2020);
    }

    #[test]
    fn test_local_zone_year_follows_local_calendar() {
        // 2020-07-01T00:00:00Z, far from any year boundary in every zone
        let midyear = PublishedAt::try_from(1_593_561_600).unwrap();
        assert_eq!(midyear.year(YearZone::Local), 2020);

        let eve = PublishedAt::try_from(1_577_836_799).unwrap();
        let expected = Local.timestamp_opt(1_577_836_799, 0).unwrap().year();
        assert_eq!(eve.year(YearZone::Local), expected);
    }

    #[test]
    fn test_country_display() {
        let country = Country {
            country: "Portugal".to_string(),
            region: "Europe".to_string(),
        };
        assert_eq!(country.to_string(), "Portugal (Europe)");
        assert!(country.is_displayable());

        let blank = Country {
            country: "  ".to_string(),
            region: String::new(),
        };
        assert!(!blank.is_displayable());
    }

    #[test]
    fn test_year_zone_serde() {
        #[derive(Deserialize)]
        struct Wrapper {
            zone: YearZone,
        }
        let parsed: Wrapper = toml::from_str("zone = \"local\"").unwrap();
        assert_eq!(parsed.zone, YearZone::Local);
        assert_eq!(YearZone::default(), YearZone::Utc);
    }
}

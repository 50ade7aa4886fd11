pub mod api_client;
pub mod requests;

pub use api_client::{APIClient, ClientError};

use jiff::{Timestamp, civil, tz::TimeZone};
use serde::{Deserialize, Serialize};

/// The event record as stored by the backend.
///
/// Every text field defaults to an empty string so that partially populated
/// records (for example, one created before a flyer was ever set) still
/// deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub title: String,
    /// Stored as received. Use [`normalize_event_date`] before showing it in
    /// a date input.
    pub date: String,
    pub time: String,
    pub location: String,
    pub map_url: String,
    pub description: String,
    /// Flyer image source. May be a regular URL or a data URL.
    pub image_url: String,
    pub last_updated: Option<Timestamp>,
}

impl Event {
    pub fn has_flyer(&self) -> bool {
        !self.image_url.is_empty()
    }
}

/// The editable fields of an event, as held by the admin form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub map_url: String,
    pub description: String,
}

/// Names one of the [`EventDraft`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EventField {
    #[display("title")]
    Title,
    #[display("date")]
    Date,
    #[display("time")]
    Time,
    #[display("location")]
    Location,
    #[display("map_url")]
    MapUrl,
    #[display("description")]
    Description,
}

impl EventField {
    pub const REQUIRED: [EventField; 3] =
        [EventField::Title, EventField::Date, EventField::Time];

    /// Look up a field by the `name` attribute used on its form control.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "location" => Some(Self::Location),
            "map_url" | "mapUrl" => Some(Self::MapUrl),
            "description" => Some(Self::Description),
            _ => None,
        }
    }
}

impl EventDraft {
    /// Seed a draft from the stored event, or all-empty when there is none.
    pub fn from_event(event: Option<&Event>) -> Self {
        match event {
            Some(event) => Self {
                title: event.title.clone(),
                date: normalize_event_date(&event.date),
                time: event.time.clone(),
                location: event.location.clone(),
                map_url: event.map_url.clone(),
                description: event.description.clone(),
            },
            None => Self::default(),
        }
    }

    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::Title => &self.title,
            EventField::Date => &self.date,
            EventField::Time => &self.time,
            EventField::Location => &self.location,
            EventField::MapUrl => &self.map_url,
            EventField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: EventField, value: String) {
        let slot = match field {
            EventField::Title => &mut self.title,
            EventField::Date => &mut self.date,
            EventField::Time => &mut self.time,
            EventField::Location => &mut self.location,
            EventField::MapUrl => &mut self.map_url,
            EventField::Description => &mut self.description,
        };
        *slot = value;
    }

    pub fn validate(&self) -> DraftValidation {
        let missing: Vec<EventField> = EventField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect();

        if missing.is_empty() {
            DraftValidation::Valid
        } else {
            DraftValidation::MissingRequired(missing)
        }
    }
}

/// Validation result for an [`EventDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidation {
    Valid,
    MissingRequired(Vec<EventField>),
}

impl DraftValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::MissingRequired(_) => {
                Some("Por favor completa todos los campos obligatorios")
            }
        }
    }
}

/// Normalize a stored event date into the `YYYY-MM-DD` form expected by a
/// date input.
///
/// Accepted inputs, tried in order:
/// - an instant with an offset (`2025-03-14T23:30:00-05:00`), reduced to its
///   UTC calendar date
/// - a civil datetime or date (`2025-03-14T19:00`, `2025-03-14`)
///
/// Anything else, including blank input, yields an empty string.
pub fn normalize_event_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return timestamp.to_zoned(TimeZone::UTC).date().to_string();
    }
    if let Ok(datetime) = raw.parse::<civil::DateTime>() {
        return datetime.date().to_string();
    }
    if let Ok(date) = raw.parse::<civil::Date>() {
        return date.to_string();
    }

    tracing::warn!(raw, "Discarding unparseable event date");
    String::new()
}

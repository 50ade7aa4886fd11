use crate::EventDraft;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Full update of the event record, as produced by the admin form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEvent {
    #[serde(flatten)]
    pub draft: EventDraft,
    /// Flyer image source to persist. Empty removes the flyer.
    pub image_url: String,
    pub last_updated: Timestamp,
}

/// Replace only the flyer of the event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFlyer {
    pub image_url: String,
    pub last_updated: Timestamp,
}

use jiff::Timestamp;
use payloads::{
    ClientError, DraftValidation, Event, EventDraft, EventField,
    normalize_event_date, requests,
};
use reqwest::StatusCode;

fn stored_event() -> Event {
    Event {
        title: "Noche de jazz".into(),
        date: "2025-03-14T00:00:00Z".into(),
        time: "19:00".into(),
        location: "Teatro Municipal".into(),
        map_url: "https://maps.google.com/?q=teatro".into(),
        description: "Entrada libre.\nTraer abrigo.".into(),
        image_url: "https://cdn.example.com/flyer.png".into(),
        last_updated: None,
    }
}

#[test]
fn normalize_plain_date() {
    assert_eq!(normalize_event_date("2025-03-14"), "2025-03-14");
}

#[test]
fn normalize_instant_uses_utc_calendar_date() {
    assert_eq!(normalize_event_date("2025-03-14T12:00:00Z"), "2025-03-14");
    // 23:30 at UTC-5 is already the next day in UTC.
    assert_eq!(
        normalize_event_date("2025-03-14T23:30:00-05:00"),
        "2025-03-15"
    );
    assert_eq!(
        normalize_event_date("2025-03-15T01:00:00+03:00"),
        "2025-03-14"
    );
}

#[test]
fn normalize_civil_datetime_keeps_its_date() {
    assert_eq!(normalize_event_date("2025-03-14T23:30"), "2025-03-14");
}

#[test]
fn normalize_blank_and_garbage_are_empty() {
    assert_eq!(normalize_event_date(""), "");
    assert_eq!(normalize_event_date("   "), "");
    assert_eq!(normalize_event_date("next friday"), "");
}

#[test]
fn normalize_trims_whitespace() {
    assert_eq!(normalize_event_date("  2025-03-14 "), "2025-03-14");
}

#[test]
fn draft_from_missing_event_is_empty() {
    assert_eq!(EventDraft::from_event(None), EventDraft::default());
}

#[test]
fn draft_from_event_copies_fields_and_normalizes_date() {
    let event = stored_event();
    let draft = EventDraft::from_event(Some(&event));

    assert_eq!(draft.title, "Noche de jazz");
    assert_eq!(draft.date, "2025-03-14");
    assert_eq!(draft.time, "19:00");
    assert_eq!(draft.location, "Teatro Municipal");
    assert_eq!(draft.map_url, "https://maps.google.com/?q=teatro");
    assert_eq!(draft.description, "Entrada libre.\nTraer abrigo.");
}

#[test]
fn draft_set_and_get_round_through_every_field() {
    let mut draft = EventDraft::default();
    draft.set(EventField::Location, "Plaza".into());
    draft.set(EventField::Description, "Linea 1\nLinea 2".into());

    assert_eq!(draft.get(EventField::Location), "Plaza");
    assert_eq!(draft.location, "Plaza");
    assert_eq!(draft.get(EventField::Description), "Linea 1\nLinea 2");
    assert_eq!(draft.get(EventField::Title), "");
}

#[test]
fn validation_requires_title_date_and_time() {
    let mut draft = EventDraft::default();
    assert_eq!(
        draft.validate(),
        DraftValidation::MissingRequired(vec![
            EventField::Title,
            EventField::Date,
            EventField::Time,
        ])
    );

    draft.set(EventField::Title, "Feria".into());
    draft.set(EventField::Date, "2025-05-01".into());
    assert_eq!(
        draft.validate(),
        DraftValidation::MissingRequired(vec![EventField::Time])
    );

    draft.set(EventField::Time, "10:00".into());
    assert!(draft.validate().is_valid());
}

#[test]
fn optional_fields_do_not_block_validation() {
    let draft = EventDraft {
        title: "Feria".into(),
        date: "2025-05-01".into(),
        time: "10:00".into(),
        ..Default::default()
    };
    assert_eq!(draft.validate(), DraftValidation::Valid);
    assert_eq!(draft.validate().error_message(), None);
}

#[test]
fn validation_message_is_user_facing() {
    let validation = EventDraft::default().validate();
    assert_eq!(
        validation.error_message(),
        Some("Por favor completa todos los campos obligatorios")
    );
}

#[test]
fn field_names_match_form_controls() {
    assert_eq!(EventField::from_name("title"), Some(EventField::Title));
    assert_eq!(EventField::from_name("mapUrl"), Some(EventField::MapUrl));
    assert_eq!(EventField::from_name("map_url"), Some(EventField::MapUrl));
    assert_eq!(EventField::from_name("flyer"), None);
    assert_eq!(EventField::MapUrl.to_string(), "map_url");
}

#[test]
fn update_event_serializes_draft_fields_inline() {
    let last_updated: Timestamp = "2025-03-01T10:00:00Z".parse().unwrap();
    let request = requests::UpdateEvent {
        draft: EventDraft::from_event(Some(&stored_event())),
        image_url: "data:image/png;base64,AAAA".into(),
        last_updated,
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["title"], "Noche de jazz");
    assert_eq!(json["date"], "2025-03-14");
    assert_eq!(json["map_url"], "https://maps.google.com/?q=teatro");
    assert_eq!(json["image_url"], "data:image/png;base64,AAAA");
    assert_eq!(json["last_updated"], "2025-03-01T10:00:00Z");
    assert!(json.get("draft").is_none());

    let parsed: requests::UpdateEvent = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, request);
}

#[test]
fn event_deserializes_with_missing_fields() {
    let event: Event =
        serde_json::from_str(r#"{"title":"Solo titulo"}"#).unwrap();
    assert_eq!(event.title, "Solo titulo");
    assert_eq!(event.image_url, "");
    assert_eq!(event.last_updated, None);
    assert!(!event.has_flyer());
    assert!(stored_event().has_flyer());
}

#[test]
fn client_error_displays_response_text() {
    let error = ClientError::APIError(
        StatusCode::BAD_REQUEST,
        "fecha invalida".into(),
    );
    assert_eq!(error.to_string(), "fecha invalida");
}

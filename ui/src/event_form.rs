//! State behind the event admin form.
//!
//! [`EventFormState`] is a plain [`Reducible`] so the form's behavior can be
//! exercised without a browser. The component in
//! [`crate::components::event_form`] owns one through `use_reducer` and feeds
//! it DOM events; persistence goes through an [`EventStore`].

use std::rc::Rc;

use jiff::Timestamp;
use payloads::{
    ClientError, DraftValidation, Event, EventDraft, EventField, requests,
};
use yew::Reducible;

pub const SUBMIT_ERROR_MESSAGE: &str =
    "Error al guardar el evento. Por favor intente nuevamente.";

/// Where the form reads the current event from and sends its updates to.
#[allow(async_fn_in_trait)]
pub trait EventStore {
    fn current_event(&self) -> Option<Event>;

    async fn update_event(
        &self,
        details: requests::UpdateEvent,
    ) -> Result<(), ClientError>;

    /// Replace only the flyer. The form folds the flyer into
    /// [`EventStore::update_event`] and never calls this.
    async fn update_flyer(
        &self,
        details: requests::UpdateFlyer,
    ) -> Result<(), ClientError>;
}

/// Metadata of a file picked in the flyer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageState {
    /// Image source currently shown. Empty when there is nothing to show.
    pub preview: String,
    pub file: Option<SelectedFile>,
    /// The selection whose data `preview` currently holds, if any.
    pub decoded: Option<SelectedFile>,
    /// Identifies the latest selection. Decode results carry the generation
    /// they were started for and are dropped once it has moved on.
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFormState {
    pub draft: EventDraft,
    pub image: ImageState,
    pub is_submitting: bool,
    pub error: Option<String>,
    stored_image_url: String,
    editing: bool,
}

pub enum FormAction {
    FieldChanged(EventField, String),
    /// `generation` must increase with every selection.
    ImageSelected { file: SelectedFile, generation: u64 },
    ImageDecoded { generation: u64, data_url: String },
    ImageDecodeFailed { generation: u64 },
    ImageCleared,
    SubmitRejected(DraftValidation),
    SubmitStarted,
    SubmitFinished(SubmitOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The store accepted the update; the form should leave.
    Saved,
    /// The store failed; the form stays with its values for a retry.
    Failed,
    /// Required fields were missing; the store was not called.
    Rejected,
    /// A submission was already in flight.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    Invalid(DraftValidation),
}

impl EventFormState {
    /// Seed the form from the stored event, or empty for a new one.
    pub fn new(current: Option<&Event>) -> Self {
        let stored_image_url =
            current.map(|e| e.image_url.clone()).unwrap_or_default();

        Self {
            draft: EventDraft::from_event(current),
            image: ImageState {
                preview: stored_image_url.clone(),
                file: None,
                decoded: None,
                generation: 0,
            },
            is_submitting: false,
            error: None,
            stored_image_url,
            editing: current.is_some(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// The flyer URL a submission made now would persist.
    ///
    /// A freshly selected file wins even while it is still decoding, in which
    /// case whatever preview is on screen is sent.
    pub fn resolved_image_url(&self) -> String {
        if self.image.file.is_some() {
            self.image.preview.clone()
        } else {
            self.stored_image_url.clone()
        }
    }

    /// Build the update request for the current draft.
    pub fn prepare_submit(
        &self,
        now: Timestamp,
    ) -> Result<requests::UpdateEvent, SubmitBlocked> {
        if self.is_submitting {
            return Err(SubmitBlocked::InFlight);
        }

        let validation = self.draft.validate();
        if !validation.is_valid() {
            return Err(SubmitBlocked::Invalid(validation));
        }

        Ok(requests::UpdateEvent {
            draft: self.draft.clone(),
            image_url: self.resolved_image_url(),
            last_updated: now,
        })
    }
}

impl Reducible for EventFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            FormAction::FieldChanged(field, value) => {
                next.draft.set(field, value);
            }
            FormAction::ImageSelected { file, generation } => {
                next.image.file = Some(file);
                next.image.generation = generation;
            }
            FormAction::ImageDecoded {
                generation,
                data_url,
            } => {
                if !next.accepts_decode(generation) {
                    return self;
                }
                next.image.preview = data_url;
                next.image.decoded = next.image.file.clone();
            }
            FormAction::ImageDecodeFailed { generation } => {
                if !next.accepts_decode(generation) {
                    return self;
                }
                // Fall back to whatever the preview still shows
                next.image.file = next.image.decoded.clone();
            }
            FormAction::ImageCleared => {
                next.image.preview.clear();
                next.image.file = None;
                next.image.decoded = None;
            }
            FormAction::SubmitRejected(validation) => {
                next.error = validation.error_message().map(str::to_string);
            }
            FormAction::SubmitStarted => {
                if next.is_submitting {
                    return self;
                }
                next.error = None;
                next.is_submitting = true;
            }
            FormAction::SubmitFinished(outcome) => {
                next.is_submitting = false;
                if outcome == SubmitOutcome::Failed {
                    next.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
                }
            }
        }

        Rc::new(next)
    }
}

impl EventFormState {
    fn accepts_decode(&self, generation: u64) -> bool {
        generation == self.image.generation && self.image.file.is_some()
    }
}

/// Run one submission of `state` against `store`.
///
/// State changes are reported through `dispatch` in the order the form
/// applies them. The caller navigates away when this returns
/// [`SubmitOutcome::Saved`].
pub async fn submit<S, D>(
    state: &EventFormState,
    store: &S,
    now: Timestamp,
    dispatch: D,
) -> SubmitOutcome
where
    S: EventStore,
    D: Fn(FormAction),
{
    let request = match state.prepare_submit(now) {
        Ok(request) => request,
        Err(SubmitBlocked::InFlight) => {
            tracing::debug!("Ignoring submit while another is in flight");
            return SubmitOutcome::Ignored;
        }
        Err(SubmitBlocked::Invalid(validation)) => {
            tracing::debug!(?validation, "Event draft rejected");
            dispatch(FormAction::SubmitRejected(validation));
            return SubmitOutcome::Rejected;
        }
    };

    dispatch(FormAction::SubmitStarted);

    let outcome = match store.update_event(request).await {
        Ok(()) => {
            tracing::info!("Event saved");
            SubmitOutcome::Saved
        }
        Err(error) => {
            tracing::error!(%error, "Failed to save event");
            SubmitOutcome::Failed
        }
    };

    dispatch(FormAction::SubmitFinished(outcome));
    outcome
}

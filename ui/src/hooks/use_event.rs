use jiff::Timestamp;
use payloads::{ClientError, Event, requests};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, event_form::EventStore, get_api_client, hooks::FetchState};

/// Handle on the stored event.
///
/// Pages obtain one from [`use_event`] and pass it down explicitly; the form
/// never looks it up on its own.
#[derive(Clone)]
pub struct EventHandle {
    pub event: FetchState<Option<Event>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    dispatch: Dispatch<State>,
}

impl PartialEq for EventHandle {
    fn eq(&self, other: &Self) -> bool {
        self.event == other.event
            && self.is_loading == other.is_loading
            && self.error == other.error
    }
}

impl EventHandle {
    /// Returns true if this is the initial load (no data, no error, loading)
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && !self.event.is_fetched() && self.error.is_none()
    }

    /// Remove the flyer from the stored event.
    pub async fn remove_flyer(&self) -> Result<(), ClientError> {
        self.update_flyer(requests::UpdateFlyer {
            image_url: String::new(),
            last_updated: Timestamp::now(),
        })
        .await
    }

    fn store(&self, event: Event) {
        self.dispatch.reduce_mut(|state| state.set_event(Some(event)));
    }
}

impl EventStore for EventHandle {
    fn current_event(&self) -> Option<Event> {
        self.event.as_ref().cloned().flatten()
    }

    async fn update_event(
        &self,
        details: requests::UpdateEvent,
    ) -> Result<(), ClientError> {
        let event = get_api_client().update_event(&details).await?;
        self.store(event);
        Ok(())
    }

    async fn update_flyer(
        &self,
        details: requests::UpdateFlyer,
    ) -> Result<(), ClientError> {
        let event = get_api_client().update_flyer(&details).await?;
        self.store(event);
        Ok(())
    }
}

/// Hook to load the stored event into global state and get a handle on it.
///
/// The event is fetched once per session; later mounts reuse the cached copy.
#[hook]
pub fn use_event() -> EventHandle {
    let (state, dispatch) = use_store::<State>();
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let dispatch = dispatch.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        use_callback((), move |_, _| {
            let dispatch = dispatch.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match get_api_client().get_event().await {
                    Ok(event) => {
                        tracing::debug!(
                            exists = event.is_some(),
                            "Loaded current event"
                        );
                        dispatch.reduce_mut(|state| state.set_event(event));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to load event");
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Load on mount unless another page already did
    {
        let refetch = refetch.clone();
        let loaded = state.has_event_loaded();

        use_effect_with((), move |_| {
            if !loaded {
                refetch.emit(());
            }
        });
    }

    EventHandle {
        event: state.current_event.clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch,
        dispatch,
    }
}

use payloads::Event;
use yewdux::prelude::*;

use crate::hooks::FetchState;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Event (managed by use_event) ===
    pub current_event: FetchState<Option<Event>>,
}

impl State {
    pub fn has_event_loaded(&self) -> bool {
        self.current_event.is_fetched()
    }

    /// The stored event, if it has been fetched and exists.
    pub fn get_event(&self) -> Option<&Event> {
        self.current_event.as_ref()?.as_ref()
    }

    pub fn set_event(&mut self, event: Option<Event>) {
        self.current_event = FetchState::Fetched(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_event_is_distinct_from_not_loaded() {
        let mut state = State::default();
        assert!(!state.has_event_loaded());
        assert_eq!(state.get_event(), None);

        state.set_event(None);
        assert!(state.has_event_loaded());
        assert_eq!(state.get_event(), None);

        let event = Event {
            title: "Feria".into(),
            ..Default::default()
        };
        state.set_event(Some(event.clone()));
        assert_eq!(state.get_event(), Some(&event));
    }
}

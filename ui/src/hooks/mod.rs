//! Hooks shared across pages.
//!
//! Fetched data is wrapped in [`FetchState`] so that "not fetched yet" stays
//! distinct from "fetched, and the backend has nothing":
//! - `NotFetched`: the API has not answered yet
//! - `Fetched(None)`: no event exists, the form opens in create mode
//! - `Fetched(Some(event))`: the form opens in edit mode

pub mod use_event;
pub mod use_push_route;
pub mod use_title;

pub use use_event::{EventHandle, use_event};
pub use use_push_route::use_push_route;
pub use use_title::use_title;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}

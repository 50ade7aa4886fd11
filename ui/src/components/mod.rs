pub mod button;
pub mod event_form;
pub mod event_summary;
pub mod input;
pub mod layout;
pub mod toast;

pub use button::Button;
pub use event_form::EventForm;
pub use event_summary::EventSummary;
pub use input::Input;
pub use toast::ToastContainer;

pub mod admin;
pub mod edit_event;
pub mod home;
pub mod not_found;

pub use admin::AdminPage;
pub use edit_event::EditEventPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;

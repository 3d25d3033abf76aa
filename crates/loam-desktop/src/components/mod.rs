//! UI Components
//!
//! Reusable UI components for the desktop application.

mod compose_panel;
mod note_card;
mod note_list;
mod notification;
mod search_bar;

pub use compose_panel::ComposePanel;
pub use note_card::NoteCard;
pub use note_list::NoteList;
pub use notification::Notification;
pub use search_bar::SearchBar;

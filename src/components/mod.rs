pub mod reminder_form;
pub mod reminder_list;
pub mod status_bar;

pub use reminder_form::{AddButton, ReminderForm};
pub use reminder_list::ReminderList;
pub use status_bar::StatusBar;

/// Flatten a rendered buffer into one string, row after row.
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

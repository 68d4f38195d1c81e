pub mod clock;
pub mod reminder;
pub mod store;

pub use clock::Clock;
pub use reminder::{Reminder, ReminderId};
pub use store::{Draft, ReminderStore};

pub mod center;
pub mod error;
pub mod gateway;
pub mod request;

pub use center::{Delivery, TerminalCenter};
pub use gateway::{log_failure, NotificationGateway, DEFAULT_TITLE};
pub use request::Sound;

#[cfg(test)]
pub use center::tokio_wall_clock;

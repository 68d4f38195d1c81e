use chrono::TimeDelta;
use log::{debug, info};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::NotificationConfig;
use crate::notify::{log_failure, Delivery, NotificationGateway, Sound, TerminalCenter};
use crate::reminders::ReminderStore;

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Date,
    Time,
    List,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Title => Focus::Date,
            Focus::Date => Focus::Time,
            Focus::Time => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Title => Focus::List,
            Focus::Date => Focus::Title,
            Focus::Time => Focus::Date,
            Focus::List => Focus::Time,
        }
    }

    pub fn is_form(&self) -> bool {
        !matches!(self, Focus::List)
    }
}

pub struct App {
    pub running: bool,
    pub focus: Focus,
    pub selected: usize,
    pub show_help: bool,
    pub status_message: Option<String>,
    /// Body of the most recently delivered notification, until the next key.
    pub alert: Option<String>,
    schedule_on_add: bool,
    appeared: bool,
    store: ReminderStore,
    gateway: NotificationGateway<TerminalCenter>,
    deliveries: UnboundedReceiver<Delivery>,
}

impl App {
    pub fn new(config: &NotificationConfig, runtime: Handle) -> Self {
        let (center, deliveries) = TerminalCenter::new(runtime, config.enabled);
        Self::with_center(config, center, deliveries)
    }

    fn with_center(
        config: &NotificationConfig,
        center: TerminalCenter,
        deliveries: UnboundedReceiver<Delivery>,
    ) -> Self {
        let sound = if config.sound { Sound::Default } else { Sound::Silent };
        Self {
            running: true,
            focus: Focus::Title,
            selected: 0,
            show_help: false,
            status_message: None,
            alert: None,
            schedule_on_add: config.schedule_on_add,
            appeared: false,
            store: ReminderStore::default(),
            gateway: NotificationGateway::new(center, config.title.clone()).with_sound(sound),
            deliveries,
        }
    }

    pub fn store(&self) -> &ReminderStore {
        &self.store
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut ReminderStore {
        &mut self.store
    }

    pub fn pending_notifications(&self) -> usize {
        self.gateway.center().pending_count()
    }

    /// Runs once, when the screen is first drawn.
    pub fn on_appear(&mut self) {
        if self.appeared {
            return;
        }
        self.appeared = true;
        if let Some(granted) = log_failure(
            "error requesting notification permission",
            self.gateway.request_permission(),
        ) {
            info!("notification permission granted: {}", granted);
        }
    }

    /// The "Add Reminder" action. Does nothing while the title is empty.
    pub fn submit(&mut self) {
        if !self.store.can_add() {
            return;
        }
        let reminder = match self.store.add() {
            Ok(reminder) => reminder.clone(),
            Err(e) => {
                debug!("add rejected: {}", e);
                return;
            }
        };
        info!(
            "added reminder {} due {}",
            reminder.id(),
            reminder.due_display()
        );

        if self.schedule_on_add {
            log_failure(
                "error scheduling notification",
                self.gateway.schedule(&reminder),
            );
        }
        self.status_message = Some(format!("Added \"{}\"", reminder.title));
    }

    pub fn remove_selected(&mut self) {
        match self.store.remove(self.selected) {
            Ok(removed) => {
                self.gateway.cancel(removed.id());
                info!("removed reminder {}", removed.id());
                if self.selected >= self.store.len() {
                    self.selected = self.store.len().saturating_sub(1);
                }
                self.status_message = Some(format!("Removed \"{}\"", removed.title));
            }
            Err(e) => debug!("remove rejected: {}", e),
        }
    }

    pub fn input_char(&mut self, c: char) {
        if self.focus == Focus::Title {
            self.store.push_title_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.focus == Focus::Title {
            self.store.pop_title_char();
        }
    }

    /// Step the draft due time. Date moves by days (coarse: months), time
    /// by five minutes (coarse: hours).
    pub fn nudge_due(&mut self, steps: i32, coarse: bool) {
        match (self.focus, coarse) {
            (Focus::Date, false) => self.store.shift_draft_days(steps.into()),
            (Focus::Date, true) => self.store.shift_draft_months(steps),
            (Focus::Time, false) => {
                self.store.shift_draft_due(TimeDelta::minutes(5 * i64::from(steps)))
            }
            (Focus::Time, true) => self.store.shift_draft_due(TimeDelta::hours(steps.into())),
            _ => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Drain fired notifications. Returns how many of them want a sound.
    pub fn poll_deliveries(&mut self) -> usize {
        let mut audible = 0;
        while let Ok(delivery) = self.deliveries.try_recv() {
            info!("delivered notification {}", delivery.id);
            self.alert = Some(format!("{}: {}", delivery.title, delivery.body));
            if delivery.sound == Sound::Default {
                audible += 1;
            }
        }
        audible
    }
}

use chrono::{DateTime, Days, Local, Months, TimeDelta};
use thiserror::Error;

use super::clock::{Clock, SystemClock};
use super::reminder::Reminder;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("reminder title is blank")]
    BlankTitle,
    #[error("index {index} out of range for {len} reminders")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Title and due time being edited before they become a reminder.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub due_at: DateTime<Local>,
}

/// Ordered, in-memory reminder collection plus the input draft.
///
/// Reminders are kept in insertion order and only change through
/// [`ReminderStore::add`] and [`ReminderStore::remove`].
pub struct ReminderStore<C: Clock = SystemClock> {
    reminders: Vec<Reminder>,
    draft: Draft,
    clock: C,
}

impl Default for ReminderStore<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> ReminderStore<C> {
    pub fn new(clock: C) -> Self {
        let draft = Draft {
            title: String::new(),
            due_at: clock.now(),
        };
        Self {
            reminders: Vec::new(),
            draft,
            clock,
        }
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether the add action is enabled for the current draft.
    pub fn can_add(&self) -> bool {
        !self.draft.title.is_empty()
    }

    /// Append a reminder built from the draft, then reset the draft.
    pub fn add(&mut self) -> Result<&Reminder, StoreError> {
        if !self.can_add() {
            return Err(StoreError::BlankTitle);
        }

        let title = std::mem::take(&mut self.draft.title);
        self.reminders.push(Reminder::new(title, self.draft.due_at));
        self.draft.due_at = self.clock.now();

        Ok(&self.reminders[self.reminders.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Result<Reminder, StoreError> {
        if index >= self.reminders.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.reminders.len(),
            });
        }
        Ok(self.reminders.remove(index))
    }

    /// Recomputed against the clock on every call.
    pub fn is_overdue(&self, reminder: &Reminder) -> bool {
        reminder.is_overdue_at(self.clock.now())
    }

    #[cfg(test)]
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn push_title_char(&mut self, c: char) {
        self.draft.title.push(c);
    }

    pub fn pop_title_char(&mut self) {
        self.draft.title.pop();
    }

    #[cfg(test)]
    pub fn set_draft_due(&mut self, due_at: DateTime<Local>) {
        self.draft.due_at = due_at;
    }

    pub fn shift_draft_due(&mut self, delta: TimeDelta) {
        if let Some(due) = self.draft.due_at.checked_add_signed(delta) {
            self.draft.due_at = due;
        }
    }

    /// Move the draft by calendar days, keeping the wall-clock time.
    pub fn shift_draft_days(&mut self, days: i64) {
        let step = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.draft.due_at.checked_add_days(step)
        } else {
            self.draft.due_at.checked_sub_days(step)
        };
        if let Some(due) = shifted {
            self.draft.due_at = due;
        }
    }

    /// Move the draft by whole months, clamping the day to the target month.
    pub fn shift_draft_months(&mut self, months: i32) {
        let step = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.draft.due_at.checked_add_months(step)
        } else {
            self.draft.due_at.checked_sub_months(step)
        };
        if let Some(due) = shifted {
            self.draft.due_at = due;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminders::clock::ManualClock;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn store_at(now: DateTime<Local>) -> (ReminderStore<ManualClock>, ManualClock) {
        let clock = ManualClock::new(now);
        (ReminderStore::new(clock.clone()), clock)
    }

    fn add(store: &mut ReminderStore<ManualClock>, title: &str, due: DateTime<Local>) {
        store.set_draft_title(title);
        store.set_draft_due(due);
        store.add().unwrap();
    }

    fn titles<C: Clock>(store: &ReminderStore<C>) -> Vec<&str> {
        store.reminders().iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_new_store_has_empty_draft_at_now() {
        let now = at(2025, 3, 1, 12, 0);
        let (store, _) = store_at(now);
        assert!(store.is_empty());
        assert_eq!(store.draft().title, "");
        assert_eq!(store.draft().due_at, now);
        assert!(!store.can_add());
    }

    #[test]
    fn test_add_appends_and_resets_draft() {
        let now = at(2025, 3, 1, 12, 0);
        let (mut store, clock) = store_at(now);
        add(&mut store, "First", at(2025, 1, 1, 9, 0));

        let later = at(2025, 3, 1, 12, 30);
        clock.set(later);
        store.set_draft_title("Second");
        store.set_draft_due(at(2026, 6, 1, 8, 15));
        let added = store.add().unwrap().clone();

        assert_eq!(added.title, "Second");
        assert_eq!(added.due_at, at(2026, 6, 1, 8, 15));
        assert_eq!(store.len(), 2);
        assert_eq!(store.reminders()[1], added);
        assert_eq!(store.draft().title, "");
        assert_eq!(store.draft().due_at, later);
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let (mut store, _) = store_at(at(2025, 3, 1, 12, 0));
        let due = at(2025, 5, 5, 5, 5);
        store.set_draft_due(due);

        assert_eq!(store.add().unwrap_err(), StoreError::BlankTitle);
        assert!(store.is_empty());
        assert_eq!(store.draft().due_at, due);
    }

    #[test]
    fn test_whitespace_title_is_not_blank() {
        let (mut store, _) = store_at(at(2025, 3, 1, 12, 0));
        store.set_draft_title(" ");
        assert!(store.can_add());
        assert!(store.add().is_ok());
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let (mut store, _) = store_at(at(2025, 3, 1, 12, 0));
        let due = at(2025, 4, 1, 9, 0);
        add(&mut store, "A", due);
        add(&mut store, "B", due);
        add(&mut store, "C", due);

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(titles(&store), vec!["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range_leaves_state() {
        let (mut store, _) = store_at(at(2025, 3, 1, 12, 0));
        add(&mut store, "A", at(2025, 4, 1, 9, 0));

        assert_eq!(
            store.remove(1).unwrap_err(),
            StoreError::IndexOutOfRange { index: 1, len: 1 }
        );
        assert_eq!(titles(&store), vec!["A"]);
    }

    #[test]
    fn test_len_after_adds_and_removes() {
        let (mut store, _) = store_at(at(2025, 3, 1, 12, 0));
        for i in 0..7 {
            add(&mut store, &format!("r{i}"), at(2025, 4, 1, 9, i));
        }
        store.remove(6).unwrap();
        store.remove(0).unwrap();
        store.remove(2).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(titles(&store), vec!["r1", "r2", "r4", "r5"]);
    }

    #[test]
    fn test_add_two_then_remove_first() {
        let (mut store, _) = store_at(at(2024, 12, 31, 8, 0));
        add(&mut store, "Buy milk", at(2025, 1, 1, 9, 0));
        add(&mut store, "Call mom", at(2025, 1, 2, 10, 0));
        store.remove(0).unwrap();

        assert_eq!(store.len(), 1);
        let only = &store.reminders()[0];
        assert_eq!(only.title, "Call mom");
        assert_eq!(only.due_at, at(2025, 1, 2, 10, 0));
    }

    #[test]
    fn test_overdue_tracks_clock() {
        let (mut store, clock) = store_at(at(2025, 1, 1, 8, 0));
        add(&mut store, "Buy milk", at(2025, 1, 1, 9, 0));
        let reminder = store.reminders()[0].clone();

        assert!(!store.is_overdue(&reminder));
        clock.set(at(2025, 1, 1, 9, 1));
        assert!(store.is_overdue(&reminder));
    }

    #[test]
    fn test_title_editing() {
        let (mut store, _) = store_at(at(2025, 1, 1, 8, 0));
        for c in "Milk!".chars() {
            store.push_title_char(c);
        }
        store.pop_title_char();
        assert_eq!(store.draft().title, "Milk");
        assert!(store.can_add());
    }

    #[test]
    fn test_shift_draft_due() {
        let (mut store, _) = store_at(at(2025, 1, 31, 8, 0));
        store.shift_draft_due(TimeDelta::days(1));
        assert_eq!(store.draft().due_at, at(2025, 2, 1, 8, 0));
        store.shift_draft_due(TimeDelta::minutes(-5));
        assert_eq!(store.draft().due_at, at(2025, 2, 1, 7, 55));
    }

    #[test]
    fn test_shift_draft_days_keeps_wall_time() {
        let (mut store, _) = store_at(at(2025, 1, 31, 9, 0));
        store.shift_draft_days(1);
        assert_eq!(store.draft().due_at, at(2025, 2, 1, 9, 0));
        store.shift_draft_days(-2);
        assert_eq!(store.draft().due_at, at(2025, 1, 30, 9, 0));
    }

    #[test]
    fn test_day_steps_keep_time_across_offset_changes() {
        // Walk a whole year one day at a time; in zones with DST the
        // offset changes twice, the hour and minute must not.
        let (mut store, _) = store_at(at(2025, 1, 1, 9, 30));
        for _ in 0..365 {
            let before = store.draft().due_at;
            store.shift_draft_days(1);
            let after = store.draft().due_at;
            assert_eq!(after.date_naive(), before.date_naive().succ_opt().unwrap());
            assert_eq!(after.time(), before.time());
        }
        assert_eq!(store.draft().due_at, at(2026, 1, 1, 9, 30));
    }

    #[test]
    fn test_shift_draft_months_clamps_day() {
        let (mut store, _) = store_at(at(2025, 1, 31, 8, 0));
        store.shift_draft_months(1);
        assert_eq!(store.draft().due_at, at(2025, 2, 28, 8, 0));
        store.shift_draft_months(-3);
        assert_eq!(store.draft().due_at, at(2024, 11, 28, 8, 0));
    }
}

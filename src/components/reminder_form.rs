use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Focus;
use crate::reminders::Draft;
use crate::theme;

const PLACEHOLDER: &str = "What do you want to remember?";

/// Draft editor: title field plus the date/time picker.
pub struct ReminderForm;

impl ReminderForm {
    /// Rows needed including borders.
    pub const HEIGHT: u16 = 4;

    pub fn render(frame: &mut Frame, area: Rect, draft: &Draft, focus: Focus) {
        let t = theme::current();
        let border = if focus.is_form() { t.focus_border } else { t.border };

        let block = Block::default()
            .title(" Add New Reminder ")
            .title_style(t.header)
            .borders(Borders::ALL)
            .border_style(border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);

        let cursor = if focus == Focus::Title { "_" } else { "" };
        let title_line = if draft.title.is_empty() {
            Line::from(vec![
                Span::raw(cursor),
                Span::styled(PLACEHOLDER, t.dim),
            ])
        } else {
            Line::from(Span::raw(format!("{}{}", draft.title, cursor)))
        };
        frame.render_widget(Paragraph::new(title_line), rows[0]);

        let picked = |active: bool| if active { t.selected } else { Style::default() };
        let due_line = Line::from(vec![
            Span::styled("Date ", t.dim),
            Span::styled(
                format!(" {} ", draft.due_at.format("%a, %b %-d, %Y")),
                picked(focus == Focus::Date),
            ),
            Span::styled("  Time ", t.dim),
            Span::styled(
                format!(" {} ", draft.due_at.format("%-I:%M %p")),
                picked(focus == Focus::Time),
            ),
        ]);
        frame.render_widget(Paragraph::new(due_line), rows[1]);
    }
}

/// The "Add Reminder" action, greyed out while the title is empty.
pub struct AddButton;

impl AddButton {
    pub fn render(frame: &mut Frame, area: Rect, enabled: bool) {
        let t = theme::current();
        let style = if enabled { t.button } else { t.button_disabled };
        let button = Paragraph::new("+ Add Reminder")
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(button, area);
    }
}

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let t = theme::current();
        let w = area.width as usize;

        let focus_str = match app.focus {
            Focus::Title => "[Title]",
            Focus::Date => "[Date]",
            Focus::Time => "[Time]",
            Focus::List => "[List]",
        };
        let pending = app.pending_notifications();
        let left = if pending > 0 && w >= 50 {
            format!(" {} {} scheduled ", focus_str, pending)
        } else {
            format!(" {} ", focus_str)
        };

        // Alerts outrank status messages, which outrank hints.
        let (right, right_style) = if let Some(ref alert) = app.alert {
            (format!(" \u{1F514} {} ", alert), t.alert)
        } else if let Some(ref msg) = app.status_message {
            (format!(" {} ", msg), t.status)
        } else {
            (hints(app.focus, w).to_string(), t.status)
        };

        let padding = " ".repeat(w.saturating_sub(left.chars().count() + right.chars().count()));

        let line = Line::from(vec![
            Span::styled(left, t.status),
            Span::styled(padding, t.status),
            Span::styled(right, right_style),
        ]);

        let bar = Paragraph::new(line).style(t.status);
        frame.render_widget(bar, area);
    }
}

fn hints(focus: Focus, w: usize) -> &'static str {
    match focus {
        Focus::Title if w >= 60 => " Type title  Enter:Add  Tab:Next  Esc:Quit ",
        Focus::Date | Focus::Time if w >= 70 => {
            " \u{2191}\u{2193}:Adjust  PgUp/PgDn:Bigger step  Enter:Add  Tab:Next  Esc:Quit "
        }
        Focus::List if w >= 60 => " jk:Select  d:Delete  Tab:Next  ?:Help  Esc:Quit ",
        Focus::List => " d:Del ?:Help ",
        _ => " Tab:Next Esc:Quit ",
    }
}

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::reminders::{Clock, ReminderStore};
use crate::theme;

const EMPTY_STATE: &str = "No reminders yet. You are all caught up!";

pub struct ReminderList;

impl ReminderList {
    pub fn render<C: Clock>(
        frame: &mut Frame,
        area: Rect,
        store: &ReminderStore<C>,
        selected_index: usize,
        focused: bool,
    ) {
        let t = theme::current();
        let w = area.width as usize;

        let title = if w >= 25 {
            format!(" Reminders ({}) ", store.len())
        } else {
            " Reminders ".to_string()
        };

        let block = Block::default()
            .title(title)
            .title_style(t.header)
            .borders(Borders::ALL)
            .border_style(if focused { t.focus_border } else { t.border });

        if store.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);

            // Vertically centre the message.
            let top = inner.height.saturating_sub(1) / 2;
            let msg_area = Rect::new(inner.x, inner.y + top, inner.width, inner.height - top);
            let msg = Paragraph::new(EMPTY_STATE)
                .style(t.dim)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(msg, msg_area);
            return;
        }

        let items: Vec<ListItem> = store
            .reminders()
            .iter()
            .map(|reminder| {
                // Overdue is evaluated on every draw, never stored.
                let title_style = if store.is_overdue(reminder) {
                    t.overdue
                } else {
                    Style::default()
                };
                ListItem::new(vec![
                    Line::from(Span::styled(format!(" {}", reminder.title), title_style)),
                    Line::from(Span::styled(format!(" {}", reminder.due_display()), t.dim)),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(t.selected)
            .highlight_symbol(">");

        let mut state = ListState::default();
        if focused {
            state.select(Some(selected_index));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }
}

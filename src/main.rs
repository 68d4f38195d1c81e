mod app;
mod components;
mod config;
mod event;
mod logging;
mod notify;
mod reminders;
mod theme;
mod tui;

use std::time::Duration;

use app::{App, Focus};
use color_eyre::Result;
use config::Config;
use crossterm::event::{KeyCode, KeyModifiers};
use log::{info, warn};
use ratatui::layout::{Constraint, Layout, Rect};

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    let log_path = logging::init(&config.logging)?;
    info!("Prioriti starting, logging to {}", log_path.display());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()?;
    let mut app = App::new(&config.notifications, runtime.handle().clone());

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;

    info!("Prioriti exiting with {} reminders", app.store().len());
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        if app.poll_deliveries() > 0 {
            if let Err(e) = tui::bell() {
                warn!("failed to ring bell: {}", e);
            }
        }

        terminal.draw(|frame| {
            let area = frame.area();

            let layout = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(components::ReminderForm::HEIGHT),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

            let header = ratatui::widgets::Paragraph::new(" Prioriti").style(theme::current().header);
            frame.render_widget(header, layout[0]);

            components::ReminderForm::render(frame, layout[1], app.store().draft(), app.focus);
            components::AddButton::render(frame, layout[2], app.store().can_add());
            components::ReminderList::render(
                frame,
                layout[3],
                app.store(),
                app.selected,
                app.focus == Focus::List,
            );

            if app.show_help {
                render_help(frame, area);
            }

            components::StatusBar::render(frame, layout[4], app);
        })?;

        app.on_appear();

        if let Some(key) = event::next_key_press(Duration::from_millis(100))? {
            app.status_message = None;
            app.alert = None;

            if app.show_help {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                    app.show_help = false;
                }
                continue;
            }

            handle_key(app, key.code, key.modifiers);
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
            app.running = false;
            return;
        }
        (KeyCode::Tab, _) => {
            app.focus_next();
            return;
        }
        (KeyCode::BackTab, _) => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    if app.focus.is_form() {
        handle_form_input(app, code);
    } else {
        handle_list_input(app, code);
    }
}

fn handle_form_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Up => app.nudge_due(1, false),
        KeyCode::Down => app.nudge_due(-1, false),
        KeyCode::PageUp => app.nudge_due(1, true),
        KeyCode::PageDown => app.nudge_due(-1, true),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

fn handle_list_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}

fn render_help(frame: &mut ratatui::Frame, area: Rect) {
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

    let dim = theme::current().dim;

    let popup_w = area.width.clamp(30, 52).min(area.width);
    let popup_h = area.height.clamp(12, 20).min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), key_style),
            Span::raw(desc),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("New reminder", section_style)),
        entry("Tab", "Title / Date / Time / List"),
        entry("\u{2191}/\u{2193}", "Date \u{00b1}1 day, time \u{00b1}5 min"),
        entry("PgUp/PgDn", "Date \u{00b1}1 month, time \u{00b1}1 hour"),
        entry("Enter", "Add reminder"),
        Line::from(""),
        Line::from(Span::styled("List", section_style)),
        entry("\u{2191}/\u{2193} j/k", "Select reminder"),
        entry("d / Del", "Delete selected reminder"),
        entry("?", "Toggle this help"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Esc", key_style),
            Span::styled(" / ", dim),
            Span::styled("Ctrl-C  ", key_style),
            Span::raw("Quit (Esc closes help first)"),
        ]),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}

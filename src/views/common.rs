use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;

/// What the list area shows instead of (or as) the list.
#[derive(Debug, PartialEq, Eq)]
pub enum Body<'a> {
    Loading,
    Error(&'a str),
    Empty,
    List,
}

/// Loading wins over a stale error; the active view's error wins over the list.
pub fn body_state(app: &App, is_empty: bool) -> Body<'_> {
    if app.load.loading {
        Body::Loading
    } else if let Some(err) = app.load.error_for(&app.view) {
        Body::Error(err)
    } else if is_empty {
        Body::Empty
    } else {
        Body::List
    }
}

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("Loading...").style(Style::default().fg(Color::Yellow));
    frame.render_widget(widget, area);
}

/// Render an error with the retry hint.
pub fn render_error(frame: &mut Frame, error: &str, area: Rect) {
    let lines = vec![
        Line::styled(format!("Error: {error}"), Style::default().fg(Color::Red)),
        Line::default(),
        Line::styled(
            "Press 'r' to retry or 'q' to quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_empty(frame: &mut Frame, text: &str, area: Rect) {
    let widget = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(widget, area);
}

/// Title bar: app name followed by view-specific context.
pub fn render_header(frame: &mut Frame, context: &str, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " Hacker News ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(255, 102, 0))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            truncate(context, (area.width as usize).saturating_sub(15)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Cut `text` to at most `width` display columns, ending in `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

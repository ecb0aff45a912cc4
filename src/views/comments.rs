use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::api::Comment;
use crate::app::{App, View};
use crate::help::footer_text;
use crate::reflow::{line_count, reflow, to_plain};
use crate::time::format_relative;
use crate::views::common::{
    Body, body_state, render_empty, render_error, render_header, render_loading,
};
use crate::views::status_bar::StatusBar;
use crate::window::window;

/// Rows assumed per comment when choosing the window. Real comments vary;
/// whatever overflows is clipped by the viewport.
pub const ESTIMATED_ROWS_PER_COMMENT: usize = 3;

const TEXT_INDENT: &str = "  ";

pub fn render(frame: &mut Frame, app: &App, area: Rect, now: DateTime<Utc>) {
    let title = match &app.view {
        View::Comments { story } => story.title.as_str(),
        View::Stories => "",
    };

    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Min(0),    // Comments
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, title, chunks[0]);
    render_comment_list(frame, app, chunks[1], now);
    render_status_bar(frame, app, chunks[2]);
}

fn render_comment_list(frame: &mut Frame, app: &App, area: Rect, now: DateTime<Utc>) {
    match body_state(app, app.comments.is_empty()) {
        Body::Loading => render_loading(frame, area),
        Body::Error(err) => render_error(frame, err, area),
        Body::Empty => render_empty(frame, "No comments yet", area),
        Body::List => {
            let lines = comment_lines(app, area.width as usize, area.height as usize, now);
            frame.render_widget(Paragraph::new(lines), area);
        }
    }
}

/// Lines for the comments around the cursor.
///
/// The window is chosen with a fixed per-comment estimate, then comments
/// above the cursor are dropped until the selected one starts on screen
/// with its text in view.
pub fn comment_lines(
    app: &App,
    width: usize,
    rows: usize,
    now: DateTime<Utc>,
) -> Vec<Line<'static>> {
    let total = app.comments.len();
    let cursor = app.comment_index.min(total.saturating_sub(1));
    let mut visible = window(total, cursor, ESTIMATED_ROWS_PER_COMMENT, rows);
    if visible.is_empty() {
        return Vec::new();
    }
    let text_width = width.saturating_sub(TEXT_INDENT.len());

    if rows > 0 {
        let height = |i: usize| comment_height(&app.comments[i], text_width);
        let mut used: usize = (visible.start..=cursor).map(height).sum();
        while visible.start < cursor && used > rows {
            used -= height(visible.start);
            visible.start += 1;
        }
    }
    debug_assert!(visible.contains(cursor));

    visible
        .range()
        .flat_map(|i| comment_item(&app.comments[i], i == cursor, text_width, now))
        .collect()
}

/// Rows `comment_item` produces: the meta line plus the reflowed text.
fn comment_height(comment: &Comment, text_width: usize) -> usize {
    1 + line_count(&comment.text, text_width)
}

/// Meta line followed by the reflowed text; `comment_height` rows.
fn comment_item(
    comment: &Comment,
    selected: bool,
    text_width: usize,
    now: DateTime<Utc>,
) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let base = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if selected { "> " } else { "  " };

    let meta = if comment.is_placeholder() {
        Line::from(vec![
            Span::styled(marker, base),
            Span::styled("[failed to load]", base.patch(dim)),
        ])
    } else {
        Line::from(vec![
            Span::styled(marker, base),
            Span::styled(comment.by.clone(), base.fg(Color::Cyan)),
            Span::styled(" · ", dim),
            Span::styled(format_relative(comment.time, now), dim),
        ])
    };

    let mut lines = vec![meta];
    for text in reflow(&to_plain(&comment.text), text_width) {
        if text.is_empty() {
            lines.push(Line::default());
        } else {
            lines.push(Line::from(vec![
                Span::raw(TEXT_INDENT),
                Span::styled(text, base),
            ]));
        }
    }
    lines
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = footer_text(&app.view, app.show_help);
    let mut bar = StatusBar::new().label("Comments").help(&help_text);
    if app.load.loading {
        bar = bar.loading("Loading...");
    }
    if !app.comments.is_empty() {
        bar = bar.position(app.comment_index + 1, app.comments.len());
    }
    bar.render(frame, area);
}

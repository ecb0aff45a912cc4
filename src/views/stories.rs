use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::api::Story;
use crate::app::App;
use crate::help::footer_text;
use crate::time::format_relative;
use crate::views::common::{
    Body, body_state, render_empty, render_error, render_header, render_loading, truncate,
};
use crate::views::status_bar::StatusBar;
use crate::window::window;

/// Title, meta line and spacer.
pub const ROWS_PER_STORY: usize = 3;

pub fn render(frame: &mut Frame, app: &App, area: Rect, now: DateTime<Utc>) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Min(0),    // Story list
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, &page_label(app), chunks[0]);
    render_story_list(frame, app, chunks[1], now);
    render_status_bar(frame, app, chunks[2]);
}

fn page_label(app: &App) -> String {
    match app.max_page() {
        Some(max) => format!("Top stories · page {}/{}", app.page + 1, max + 1),
        None => format!("Top stories · page {}", app.page + 1),
    }
}

fn render_story_list(frame: &mut Frame, app: &App, area: Rect, now: DateTime<Utc>) {
    match body_state(app, app.stories.is_empty()) {
        Body::Loading => render_loading(frame, area),
        Body::Error(err) => render_error(frame, err, area),
        Body::Empty => render_empty(frame, "No stories", area),
        Body::List => {
            let lines = story_lines(app, area.width as usize, area.height as usize, now);
            frame.render_widget(Paragraph::new(lines), area);
        }
    }
}

/// Lines for the stories that fit in `rows`, windowed around the cursor.
pub fn story_lines(app: &App, width: usize, rows: usize, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let total = app.stories.len();
    let cursor = app.story_index.min(total.saturating_sub(1));
    let first_rank = app.page * app.page_size + 1;

    let visible = window(total, cursor, ROWS_PER_STORY, rows);
    let mut lines = Vec::with_capacity(visible.len() * ROWS_PER_STORY);
    for i in visible.range() {
        lines.extend(story_item(&app.stories[i], first_rank + i, i == cursor, width, now));
    }
    lines
}

fn story_item(
    story: &Story,
    rank: usize,
    selected: bool,
    width: usize,
    now: DateTime<Utc>,
) -> [Line<'static>; ROWS_PER_STORY] {
    let dim = Style::default().fg(Color::DarkGray);
    let base = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if selected { "> " } else { "  " };
    let prefix = format!("{marker}{rank:>3}. ");
    let indent = " ".repeat(prefix.width());
    let budget = width.saturating_sub(prefix.width());

    if story.is_placeholder() {
        let title = Line::from(vec![
            Span::styled(prefix, base),
            Span::styled("[failed to load]", base.patch(dim)),
        ]);
        return [title, Line::default(), Line::default()];
    }

    let title_text = truncate(&story.title, budget);
    let domain = match story.domain() {
        "" => String::new(),
        host => format!(" ({host})"),
    };
    let mut title = vec![
        Span::styled(prefix, base),
        Span::styled(title_text.clone(), base.fg(Color::White)),
    ];
    if !domain.is_empty() && title_text.width() + domain.width() <= budget {
        title.push(Span::styled(domain, dim));
    }

    let meta = Line::from(vec![
        Span::raw(indent),
        Span::styled(
            format!("▲ {}", story.score),
            Style::default().fg(Color::Rgb(255, 102, 0)),
        ),
        Span::raw(" | "),
        Span::styled(story.by.clone(), Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled(format!("{} comments", story.descendants), dim),
        Span::raw(" | "),
        Span::styled(format_relative(story.time, now), dim),
    ]);

    [Line::from(title), meta, Line::default()]
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = footer_text(&app.view, app.show_help);
    let mut bar = StatusBar::new().label("Stories").help(&help_text);
    if app.load.loading {
        bar = bar.loading("Loading...");
    }
    if !app.stories.is_empty() {
        bar = bar.position(app.story_index + 1, app.stories.len());
    }
    bar.render(frame, area);
}

pub mod comments;
pub mod common;
pub mod status_bar;
pub mod stories;

#[cfg(test)]
pub mod tests;

use chrono::{DateTime, Utc};
use ratatui::Frame;

use crate::app::{App, View};

/// Draw the whole screen for the current view.
pub fn render(frame: &mut Frame, app: &App, now: DateTime<Utc>) {
    let area = frame.area();
    match app.view {
        View::Stories => stories::render(frame, app, area, now),
        View::Comments { .. } => comments::render(frame, app, area, now),
    }
}

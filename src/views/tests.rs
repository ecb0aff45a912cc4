//! Shared helpers for view tests.

use ratatui::{Frame, Terminal, backend::TestBackend};

/// Draw with `render_fn` into a `width` x `height` test terminal and return
/// the screen as text, trailing blanks trimmed.
pub fn render_to_string<F>(width: u16, height: u16, render_fn: F) -> String
where
    F: FnOnce(&mut Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render_fn(frame)).unwrap();
    let buffer = terminal.backend().buffer().clone();

    let mut rows = Vec::with_capacity(buffer.area.height as usize);
    for y in 0..buffer.area.height {
        let mut row = String::new();
        for x in 0..buffer.area.width {
            row.push(buffer[(x, y)].symbol().chars().next().unwrap_or(' '));
        }
        rows.push(row.trim_end().to_string());
    }
    rows.join("\n").trim_end().to_string()
}

/// Flatten styled lines to their text.
pub fn plain(lines: &[ratatui::text::Line]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

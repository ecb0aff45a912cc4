use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Message, View};

/// A declarative keybinding map that can be composed and extended.
#[derive(Clone)]
pub struct Keymap {
    bindings: Vec<(KeyCode, KeyModifiers, Message)>,
}

impl Keymap {
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a key binding with no modifiers.
    pub fn bind(mut self, code: KeyCode, message: Message) -> Self {
        self.bindings.push((code, KeyModifiers::NONE, message));
        self
    }

    /// Add a key binding with Ctrl modifier.
    pub fn bind_ctrl(mut self, code: KeyCode, message: Message) -> Self {
        self.bindings.push((code, KeyModifiers::CONTROL, message));
        self
    }

    /// Look up a message for a key event.
    /// Later bindings take precedence over earlier ones.
    pub fn get(&self, event: &KeyEvent) -> Option<Message> {
        self.bindings
            .iter()
            .rev()
            .find(|(code, mods, _)| *code == event.code && event.modifiers.contains(*mods))
            .map(|(_, _, msg)| msg.clone())
    }

    /// Append another keymap; its bindings take precedence.
    pub fn extend(mut self, other: Self) -> Self {
        self.bindings.extend(other.bindings);
        self
    }

    /// All keys bound to `message`, in binding order.
    pub fn keys_for(&self, message: &Message) -> Vec<(KeyCode, KeyModifiers)> {
        self.bindings
            .iter()
            .filter(|(_, _, msg)| msg == message)
            .map(|(code, mods, _)| (*code, *mods))
            .collect()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a key binding for display in help text.
pub fn format_key(code: KeyCode, mods: KeyModifiers) -> String {
    let key_str = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        _ => "?".to_string(),
    };
    if mods.contains(KeyModifiers::CONTROL) {
        format!("C-{key_str}")
    } else {
        key_str
    }
}

/// Keys that work in every view.
pub fn global_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('q'), Message::Quit)
        .bind_ctrl(KeyCode::Char('c'), Message::Quit)
        .bind(KeyCode::Char('?'), Message::ToggleHelp)
}

/// Cursor movement, refresh and browser open, shared by both views.
fn navigation_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('j'), Message::SelectNext)
        .bind(KeyCode::Down, Message::SelectNext)
        .bind(KeyCode::Char('k'), Message::SelectPrev)
        .bind(KeyCode::Up, Message::SelectPrev)
        .bind(KeyCode::Char('g'), Message::SelectFirst)
        .bind(KeyCode::Char('G'), Message::SelectLast)
        .bind(KeyCode::Char('r'), Message::Refresh)
        .bind(KeyCode::Enter, Message::OpenUrl)
        .bind(KeyCode::Char('o'), Message::OpenUrl)
}

pub fn stories_keymap() -> Keymap {
    navigation_keymap()
        .bind(KeyCode::Char('c'), Message::ToggleComments)
        .bind(KeyCode::Char('l'), Message::NextPage)
        .bind(KeyCode::PageUp, Message::NextPage)
        .bind(KeyCode::Char('h'), Message::PrevPage)
        .bind(KeyCode::PageDown, Message::PrevPage)
}

pub fn comments_keymap() -> Keymap {
    navigation_keymap()
        .bind(KeyCode::Char('c'), Message::ToggleComments)
        .bind(KeyCode::Esc, Message::ToggleComments)
}

/// The full keymap in effect for `view`.
pub fn keymap_for(view: &View) -> Keymap {
    let local = match view {
        View::Stories => stories_keymap(),
        View::Comments { .. } => comments_keymap(),
    };
    local.extend(global_keymap())
}

pub fn handle_key(key: KeyEvent, app: &App) -> Option<Message> {
    keymap_for(&app.view).get(&key)
}

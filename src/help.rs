//! Footer help text generated from keymaps.

use crate::app::{Message, View};
use crate::keys::{Keymap, format_key, keymap_for};

/// One footer entry covering one or more related actions.
pub struct HelpItem {
    /// Keys for these messages are joined with "/".
    messages: Vec<Message>,
    label: &'static str,
}

impl HelpItem {
    pub fn new(message: Message, label: &'static str) -> Self {
        Self {
            messages: vec![message],
            label,
        }
    }

    /// Paired actions such as next/prev, shown as `j/k:nav`.
    pub fn pair(first: Message, second: Message, label: &'static str) -> Self {
        Self {
            messages: vec![first, second],
            label,
        }
    }

    /// Render as `keys:label` using the first key bound to each message.
    /// Returns None when nothing in `keymap` triggers these messages.
    pub fn format(&self, keymap: &Keymap) -> Option<String> {
        let keys: Vec<String> = self
            .messages
            .iter()
            .filter_map(|msg| {
                keymap
                    .keys_for(msg)
                    .first()
                    .map(|&(code, mods)| format_key(code, mods))
            })
            .collect();
        if keys.is_empty() {
            return None;
        }
        Some(format!("{}:{}", keys.join("/"), self.label))
    }
}

/// Help entries for one view, in long and short form.
pub struct HelpConfig {
    pub expanded: Vec<HelpItem>,
    pub compact: Vec<HelpItem>,
}

impl HelpConfig {
    pub fn format(&self, keymap: &Keymap, show_expanded: bool) -> String {
        let items = if show_expanded {
            &self.expanded
        } else {
            &self.compact
        };
        items
            .iter()
            .filter_map(|item| item.format(keymap))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

pub fn stories_help() -> HelpConfig {
    use Message::{
        NextPage, OpenUrl, PrevPage, Quit, Refresh, SelectFirst, SelectLast, SelectNext,
        SelectPrev, ToggleComments, ToggleHelp,
    };
    HelpConfig {
        expanded: vec![
            HelpItem::pair(SelectNext, SelectPrev, "nav"),
            HelpItem::pair(SelectFirst, SelectLast, "top/bottom"),
            HelpItem::pair(NextPage, PrevPage, "page"),
            HelpItem::new(ToggleComments, "comments"),
            HelpItem::new(OpenUrl, "open"),
            HelpItem::new(Refresh, "refresh"),
            HelpItem::new(Quit, "quit"),
            HelpItem::new(ToggleHelp, "hide"),
        ],
        compact: vec![
            HelpItem::pair(NextPage, PrevPage, "page"),
            HelpItem::new(ToggleComments, "comments"),
            HelpItem::new(ToggleHelp, "help"),
            HelpItem::new(Quit, "quit"),
        ],
    }
}

pub fn comments_help() -> HelpConfig {
    use Message::{
        OpenUrl, Quit, Refresh, SelectFirst, SelectLast, SelectNext, SelectPrev, ToggleComments,
        ToggleHelp,
    };
    HelpConfig {
        expanded: vec![
            HelpItem::pair(SelectNext, SelectPrev, "nav"),
            HelpItem::pair(SelectFirst, SelectLast, "top/bottom"),
            HelpItem::new(OpenUrl, "open story"),
            HelpItem::new(Refresh, "reload"),
            HelpItem::new(ToggleComments, "back"),
            HelpItem::new(Quit, "quit"),
            HelpItem::new(ToggleHelp, "hide"),
        ],
        compact: vec![
            HelpItem::new(ToggleComments, "back"),
            HelpItem::new(Refresh, "reload"),
            HelpItem::new(ToggleHelp, "help"),
            HelpItem::new(Quit, "quit"),
        ],
    }
}

/// Footer help for the current view.
pub fn footer_text(view: &View, show_expanded: bool) -> String {
    let config = match view {
        View::Stories => stories_help(),
        View::Comments { .. } => comments_help(),
    };
    config.format(&keymap_for(view), show_expanded)
}

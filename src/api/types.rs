use serde::Deserialize;

/// Raw item as returned by `/item/{id}.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct HnItem {
    pub id: u64,
    pub by: Option<String>,
    pub time: Option<u64>,
    pub text: Option<String>,
    pub url: Option<String>,
    pub score: Option<u32>,
    pub title: Option<String>,
    pub descendants: Option<u32>,
    #[serde(default)]
    pub kids: Vec<u64>,
    pub deleted: Option<bool>,
    pub dead: Option<bool>,
}

/// A story slot. `Story::default()` stands in for an item that failed to load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Story {
    pub id: u64,
    pub title: String,
    pub url: Option<String>,
    pub score: u32,
    pub by: String,
    pub time: u64,
    pub descendants: u32,
    pub kids: Vec<u64>,
}

impl Story {
    pub fn from_item(item: HnItem) -> Self {
        Story {
            id: item.id,
            title: item
                .title
                .map(|t| html_escape::decode_html_entities(&t).into_owned())
                .unwrap_or_default(),
            url: item.url,
            score: item.score.unwrap_or(0),
            by: item.by.unwrap_or_else(|| "[deleted]".to_string()),
            time: item.time.unwrap_or(0),
            descendants: item.descendants.unwrap_or(0),
            kids: item.kids,
        }
    }

    /// True for a slot whose fetch failed.
    pub fn is_placeholder(&self) -> bool {
        self.id == 0
    }

    /// URL to the HN discussion page for this story.
    pub fn hn_url(&self) -> String {
        format!("https://news.ycombinator.com/item?id={}", self.id)
    }

    /// Host of the story URL without a leading `www.`; empty for self-posts.
    pub fn domain(&self) -> &str {
        let Some(url) = self.url.as_deref() else {
            return "";
        };
        let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
        let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
        host.strip_prefix("www.").unwrap_or(host)
    }

    /// URL to the story content (article URL, or HN page for self-posts).
    pub fn content_url(&self) -> String {
        self.url.clone().unwrap_or_else(|| self.hn_url())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub by: String,
    /// Raw HTML body; reflowed at render time.
    pub text: String,
    pub time: u64,
}

impl Comment {
    pub fn from_item(item: HnItem) -> Self {
        if item.deleted.unwrap_or(false) || item.dead.unwrap_or(false) {
            return Comment {
                id: item.id,
                by: "[deleted]".to_string(),
                time: item.time.unwrap_or(0),
                ..Default::default()
            };
        }

        Comment {
            id: item.id,
            by: item.by.unwrap_or_else(|| "[deleted]".to_string()),
            text: item.text.unwrap_or_default(),
            time: item.time.unwrap_or(0),
        }
    }

    /// True for an entry whose fetch failed.
    pub fn is_placeholder(&self) -> bool {
        self.id == 0
    }
}

/// One page of the ranked story list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryPage {
    /// The page actually served; may differ from the one requested when the
    /// request ran past the end of the list.
    pub page: usize,
    /// Length of the full ranked id list at fetch time.
    pub total_ids: usize,
    pub stories: Vec<Story>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(text: Option<&str>, deleted: bool, dead: bool) -> HnItem {
        HnItem {
            id: 7,
            by: Some("testuser".to_string()),
            time: Some(1234567890),
            text: text.map(String::from),
            url: None,
            score: None,
            title: None,
            descendants: None,
            kids: vec![],
            deleted: if deleted { Some(true) } else { None },
            dead: if dead { Some(true) } else { None },
        }
    }

    #[test]
    fn story_from_item_fills_defaults() {
        let item: HnItem =
            serde_json::from_str(r#"{"id": 42, "title": "Rust &amp; you", "kids": [1, 2]}"#)
                .unwrap();
        let story = Story::from_item(item);
        assert_eq!(story.id, 42);
        assert_eq!(story.title, "Rust & you");
        assert_eq!(story.by, "[deleted]");
        assert_eq!(story.score, 0);
        assert_eq!(story.kids, vec![1, 2]);
    }

    #[test]
    fn default_story_is_placeholder() {
        assert!(Story::default().is_placeholder());
        assert!(!Story::from_item(make_item(None, false, false)).is_placeholder());
    }

    #[test]
    fn content_url_falls_back_to_discussion() {
        let story = Story {
            id: 99,
            url: None,
            ..Default::default()
        };
        assert_eq!(
            story.content_url(),
            "https://news.ycombinator.com/item?id=99"
        );
    }

    #[test]
    fn domain_strips_scheme_path_and_www() {
        let story = |url: &str| Story {
            url: Some(url.to_string()),
            ..Default::default()
        };
        assert_eq!(story("https://www.example.com/a/b?c").domain(), "example.com");
        assert_eq!(story("http://lwn.net").domain(), "lwn.net");
        assert_eq!(story("https://blog.rust-lang.org#x").domain(), "blog.rust-lang.org");
        assert_eq!(Story::default().domain(), "");
    }

    #[test]
    fn comment_keeps_raw_html() {
        let comment = Comment::from_item(make_item(Some("<p>Hi &amp; bye"), false, false));
        assert_eq!(comment.by, "testuser");
        assert_eq!(comment.text, "<p>Hi &amp; bye");
    }

    #[test]
    fn deleted_and_dead_comments_lose_their_text() {
        for (deleted, dead) in [(true, false), (false, true)] {
            let comment = Comment::from_item(make_item(Some("gone"), deleted, dead));
            assert_eq!(comment.id, 7);
            assert_eq!(comment.by, "[deleted]");
            assert!(comment.text.is_empty());
        }
    }
}

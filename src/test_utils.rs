//! Test data builders for state and view testing.

use crate::api::{Comment, DEFAULT_PAGE_SIZE, Story, StoryPage};
use crate::app::{App, LoadState, View};

/// Fixed timestamp for deterministic tests: 2023-11-16 00:00:00 UTC.
/// Sample data is stamped around 1700000000, about a day earlier.
pub const TEST_NOW: i64 = 1700092800;

pub struct StoryBuilder {
    story: Story,
}

impl Default for StoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryBuilder {
    pub fn new() -> Self {
        Self {
            story: Story {
                id: 1,
                title: "Test Story".to_string(),
                url: Some("https://example.com".to_string()),
                score: 100,
                by: "testuser".to_string(),
                time: 1700000000,
                descendants: 10,
                kids: vec![],
            },
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.story.id = id;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.story.title = title.to_string();
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.story.url = Some(url.to_string());
        self
    }

    pub fn no_url(mut self) -> Self {
        self.story.url = None;
        self
    }

    pub fn score(mut self, score: u32) -> Self {
        self.story.score = score;
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.story.by = author.to_string();
        self
    }

    pub fn comments(mut self, count: u32) -> Self {
        self.story.descendants = count;
        self
    }

    pub fn time(mut self, time: u64) -> Self {
        self.story.time = time;
        self
    }

    pub fn kids(mut self, kids: Vec<u64>) -> Self {
        self.story.kids = kids;
        self
    }

    pub fn build(self) -> Story {
        self.story
    }
}

pub struct CommentBuilder {
    comment: Comment,
}

impl Default for CommentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentBuilder {
    pub fn new() -> Self {
        Self {
            comment: Comment {
                id: 1,
                by: "commenter".to_string(),
                text: "Test comment".to_string(),
                time: 1700000000,
            },
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.comment.id = id;
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.comment.text = text.to_string();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.comment.by = author.to_string();
        self
    }

    pub fn time(mut self, time: u64) -> Self {
        self.comment.time = time;
        self
    }

    pub fn build(self) -> Comment {
        self.comment
    }
}

pub struct TestAppBuilder {
    view: View,
    stories: Vec<Story>,
    comments: Vec<Comment>,
    story_index: usize,
    comment_index: usize,
    page: usize,
    total_ids: Option<usize>,
    loading: bool,
    error: Option<String>,
    show_help: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            view: View::Stories,
            stories: Vec::new(),
            comments: Vec::new(),
            story_index: 0,
            comment_index: 0,
            page: 0,
            total_ids: None,
            loading: false,
            error: None,
            show_help: false,
        }
    }

    /// Open the comments view for `story`.
    pub fn viewing(mut self, story: Story) -> Self {
        self.view = View::Comments { story };
        self
    }

    pub fn with_stories(mut self, stories: Vec<Story>) -> Self {
        self.stories = stories;
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.story_index = index;
        self
    }

    pub fn comment_selected(mut self, index: usize) -> Self {
        self.comment_index = index;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn total_ids(mut self, total: usize) -> Self {
        self.total_ids = Some(total);
        self
    }

    pub fn loading(mut self) -> Self {
        self.loading = true;
        self
    }

    /// Last error of the view the app is built in.
    pub fn error(mut self, msg: &str) -> Self {
        self.error = Some(msg.to_string());
        self
    }

    pub fn show_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn build(self) -> App {
        let mut app = App::new(DEFAULT_PAGE_SIZE).with_start_page(self.page);
        app.view = self.view;
        app.stories = self.stories;
        app.comments = self.comments;
        app.story_index = self.story_index;
        app.comment_index = self.comment_index;
        app.total_ids = self.total_ids;
        let (story_error, comment_error) = match app.view {
            View::Stories => (self.error, None),
            View::Comments { .. } => (None, self.error),
        };
        app.load = LoadState {
            loading: self.loading,
            stories_in_flight: false,
            story_error,
            comment_error,
        };
        app.show_help = self.show_help;
        app
    }
}

/// `count` distinct stories, each with two child comment ids.
pub fn numbered_stories(count: usize) -> Vec<Story> {
    numbered_from(1, count)
}

fn numbered_from(first: u64, count: usize) -> Vec<Story> {
    (first..first + count as u64)
        .map(|id| {
            StoryBuilder::new()
                .id(id)
                .title(&format!("Story number {id}"))
                .url(&format!("https://example.com/{id}"))
                .score(id as u32 * 10)
                .author(&format!("user{id}"))
                .comments(2)
                .kids(vec![id * 1000 + 1, id * 1000 + 2])
                .build()
        })
        .collect()
}

/// A served page of `count` stories out of `total_ids`.
pub fn story_page(page: usize, count: usize, total_ids: usize) -> StoryPage {
    StoryPage {
        page,
        total_ids,
        stories: numbered_from((page * count) as u64 + 1, count),
    }
}

pub fn sample_stories() -> Vec<Story> {
    vec![
        StoryBuilder::new()
            .id(1)
            .title("Show HN: A pager for Hacker News in the terminal")
            .url("https://github.com/user/hn-pager")
            .score(142)
            .author("dang")
            .comments(47)
            .kids(vec![100, 101])
            .time(1700000000)
            .build(),
        StoryBuilder::new()
            .id(2)
            .title("Why Rust is the Future of Systems Programming")
            .url("https://example.com/rust-future")
            .score(89)
            .author("pg")
            .comments(23)
            .time(1699990000)
            .build(),
        StoryBuilder::new()
            .id(3)
            .title("Ask HN: What are you working on?")
            .no_url()
            .score(56)
            .author("sama")
            .comments(128)
            .time(1699980000)
            .build(),
        StoryBuilder::new()
            .id(4)
            .title("The unreasonable effectiveness of simple HTML")
            .url("https://blog.example.com/simple-html")
            .score(234)
            .author("tptacek")
            .comments(89)
            .time(1699970000)
            .build(),
        StoryBuilder::new()
            .id(5)
            .title("A Deep Dive into Linux Kernel Networking")
            .url("https://lwn.net/kernel-networking")
            .score(167)
            .author("patio11")
            .comments(34)
            .time(1699960000)
            .build(),
    ]
}

pub fn sample_comments() -> Vec<Comment> {
    vec![
        CommentBuilder::new()
            .id(100)
            .text("This is a great project! I love the <i>vim</i> keybindings.")
            .author("commenter1")
            .time(1700000000)
            .build(),
        CommentBuilder::new()
            .id(101)
            .text("Agreed.<p>Paging by twenty at a time feels right &amp; fast.")
            .author("commenter2")
            .time(1700001000)
            .build(),
        CommentBuilder::new()
            .id(102)
            .text("Does this work on Windows?")
            .author("windowsuser")
            .time(1700003000)
            .build(),
        Comment::default(),
        CommentBuilder::new()
            .id(104)
            .text("Nice work! Any plans for search functionality?")
            .author("searcher")
            .time(1700004000)
            .build(),
    ]
}

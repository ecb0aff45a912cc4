use crate::api::{ApiError, Comment, DEFAULT_PAGE_SIZE, Story, StoryPage};

/// Fetch completions, tagged with the request they answer.
#[derive(Debug)]
pub enum AsyncResult {
    Stories {
        page: usize,
        result: Result<StoryPage, ApiError>,
    },
    Comments {
        story_id: u64,
        result: Result<Vec<Comment>, ApiError>,
    },
}

/// Side effects requested by a transition. The executor runs them and feeds
/// any result back in as an `AsyncResult`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchStoryPage(usize),
    FetchComments { story_id: u64, kids: Vec<u64> },
    OpenUrl(String),
}

/// Loading and error state. Each view keeps its own last error so a
/// failure in one never hides the other's list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadState {
    pub loading: bool,
    /// A story page request is outstanding.
    pub stories_in_flight: bool,
    pub story_error: Option<String>,
    pub comment_error: Option<String>,
}

impl LoadState {
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// The error to show for `view`, if its last fetch failed.
    pub fn error_for(&self, view: &View) -> Option<&str> {
        match view {
            View::Stories => self.story_error.as_deref(),
            View::Comments { .. } => self.comment_error.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Stories,
    Comments {
        story: Story,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Resize(u16, u16),
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    ToggleComments,
    NextPage,
    PrevPage,
    Refresh,
    OpenUrl,
    ToggleHelp,
    Quit,
}

/// Anything the state machine consumes.
#[derive(Debug)]
pub enum Input {
    Message(Message),
    Loaded(AsyncResult),
}

impl From<Message> for Input {
    fn from(msg: Message) -> Self {
        Self::Message(msg)
    }
}

impl From<AsyncResult> for Input {
    fn from(result: AsyncResult) -> Self {
        Self::Loaded(result)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub view: View,
    pub stories: Vec<Story>,
    pub comments: Vec<Comment>,
    pub story_index: usize,
    pub comment_index: usize,
    pub page: usize,
    /// Length of the ranked id list, known once a page has loaded.
    pub total_ids: Option<usize>,
    pub page_size: usize,
    pub load: LoadState,
    pub width: u16,
    pub height: u16,
    pub show_help: bool,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Pure transition: consume `app` and one input, return the next state and
/// the command to run, if any.
pub fn apply(mut app: App, input: impl Into<Input>) -> (App, Option<Command>) {
    let command = match input.into() {
        Input::Message(msg) => app.update(msg),
        Input::Loaded(result) => {
            app.handle_async_result(result);
            None
        }
    };
    (app, command)
}

const fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index >= len {
        len - 1
    } else {
        index
    }
}

impl App {
    pub fn new(page_size: usize) -> Self {
        Self {
            view: View::default(),
            stories: Vec::new(),
            comments: Vec::new(),
            story_index: 0,
            comment_index: 0,
            page: 0,
            total_ids: None,
            page_size: page_size.max(1),
            load: LoadState::default(),
            width: 0,
            height: 0,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn with_start_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Kick off the first page load.
    pub fn init(&mut self) -> Command {
        self.fetch_stories()
    }

    /// Highest valid page index, once the id list length is known.
    pub fn max_page(&self) -> Option<usize> {
        self.total_ids
            .map(|total| total.div_ceil(self.page_size).saturating_sub(1))
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.stories.get(self.story_index)
    }

    pub fn update(&mut self, msg: Message) -> Option<Command> {
        if self.should_quit {
            return None;
        }

        match msg {
            Message::Resize(width, height) => {
                self.width = width;
                self.height = height;
                tracing::debug!(width = self.width, height = self.height, "resized");
                None
            }
            Message::SelectNext => {
                self.select_next();
                None
            }
            Message::SelectPrev => {
                self.select_prev();
                None
            }
            Message::SelectFirst => {
                *self.cursor_mut() = 0;
                None
            }
            Message::SelectLast => {
                let count = self.item_count();
                *self.cursor_mut() = count.saturating_sub(1);
                None
            }
            Message::ToggleComments => self.toggle_comments(),
            Message::NextPage => self.next_page(),
            Message::PrevPage => self.prev_page(),
            Message::Refresh => self.refresh(),
            Message::OpenUrl => self.open_url(),
            Message::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            Message::Quit => {
                self.should_quit = true;
                None
            }
        }
    }

    pub fn handle_async_result(&mut self, result: AsyncResult) {
        if self.should_quit {
            return;
        }

        match result {
            AsyncResult::Stories { page, result } => {
                if page != self.page {
                    tracing::debug!(page, current = self.page, "discarding stale story page");
                    return;
                }
                self.load.stories_in_flight = false;
                if self.view == View::Stories {
                    self.load.set_loading(false);
                }
                match result {
                    Ok(loaded) => {
                        tracing::debug!(
                            page = loaded.page,
                            total = loaded.total_ids,
                            count = loaded.stories.len(),
                            "story page loaded"
                        );
                        self.page = loaded.page;
                        self.total_ids = Some(loaded.total_ids);
                        self.stories = loaded.stories;
                        self.story_index = clamp_index(self.story_index, self.stories.len());
                        self.load.story_error = None;
                    }
                    Err(e) => {
                        tracing::warn!(
                            page,
                            transient = e.is_transient(),
                            error = %e,
                            "story page failed"
                        );
                        self.load.story_error =
                            Some(format!("Couldn't load page {}: {e}", page + 1));
                    }
                }
            }
            AsyncResult::Comments { story_id, result } => {
                let is_current =
                    matches!(&self.view, View::Comments { story } if story.id == story_id);
                if !is_current {
                    tracing::debug!(story_id, "discarding comments for a closed story");
                    return;
                }
                self.load.set_loading(false);
                match result {
                    Ok(comments) => {
                        tracing::debug!(story_id, count = comments.len(), "comments loaded");
                        self.comments = comments;
                        self.comment_index = clamp_index(self.comment_index, self.comments.len());
                        self.load.comment_error = None;
                    }
                    Err(e) => {
                        tracing::warn!(
                            story_id,
                            transient = e.is_transient(),
                            error = %e,
                            "comments failed"
                        );
                        self.load.comment_error = Some(format!("Couldn't load comments: {e}"));
                    }
                }
            }
        }
    }

    fn item_count(&self) -> usize {
        match self.view {
            View::Stories => self.stories.len(),
            View::Comments { .. } => self.comments.len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.view {
            View::Stories => &mut self.story_index,
            View::Comments { .. } => &mut self.comment_index,
        }
    }

    fn select_next(&mut self) {
        let count = self.item_count();
        let cursor = self.cursor_mut();
        if count > 0 && *cursor < count - 1 {
            *cursor += 1;
        }
    }

    fn select_prev(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    fn toggle_comments(&mut self) -> Option<Command> {
        match &self.view {
            View::Stories => {
                let story = self
                    .selected_story()
                    .filter(|s| !s.is_placeholder())?
                    .clone();
                let command = Command::FetchComments {
                    story_id: story.id,
                    kids: story.kids.clone(),
                };
                tracing::debug!(story_id = story.id, kids = story.kids.len(), "opening comments");
                self.view = View::Comments { story };
                self.comments.clear();
                self.comment_index = 0;
                self.load.comment_error = None;
                self.load.set_loading(true);
                Some(command)
            }
            View::Comments { .. } => {
                self.view = View::Stories;
                self.comments.clear();
                self.comment_index = 0;
                self.load.comment_error = None;
                self.load.set_loading(self.load.stories_in_flight);
                None
            }
        }
    }

    fn fetch_stories(&mut self) -> Command {
        tracing::debug!(page = self.page, "fetching story page");
        self.load.set_loading(true);
        self.load.stories_in_flight = true;
        Command::FetchStoryPage(self.page)
    }

    fn next_page(&mut self) -> Option<Command> {
        if self.view != View::Stories {
            return None;
        }
        self.page += 1;
        Some(self.fetch_stories())
    }

    fn prev_page(&mut self) -> Option<Command> {
        if self.view != View::Stories || self.page == 0 {
            return None;
        }
        self.page -= 1;
        Some(self.fetch_stories())
    }

    fn refresh(&mut self) -> Option<Command> {
        match &self.view {
            View::Stories => Some(self.fetch_stories()),
            View::Comments { story } => {
                let command = Command::FetchComments {
                    story_id: story.id,
                    kids: story.kids.clone(),
                };
                self.load.set_loading(true);
                Some(command)
            }
        }
    }

    fn open_url(&self) -> Option<Command> {
        let story = match &self.view {
            View::Stories => self.selected_story().filter(|s| !s.is_placeholder())?,
            View::Comments { story } => story,
        };
        Some(Command::OpenUrl(story.content_url()))
    }
}

//! Runs the commands produced by state transitions.

use std::io;

use tokio::sync::mpsc;

use crate::api::DataSource;
use crate::app::{AsyncResult, Command};

type Opener = fn(&str) -> io::Result<()>;

fn open_in_browser(url: &str) -> io::Result<()> {
    open::that(url)
}

/// Spawns fetches on the tokio runtime and reports completions on `tx`.
pub struct Executor<S> {
    source: S,
    tx: mpsc::Sender<AsyncResult>,
    opener: Opener,
}

impl<S: DataSource> Executor<S> {
    pub fn new(source: S, tx: mpsc::Sender<AsyncResult>) -> Self {
        Self {
            source,
            tx,
            opener: open_in_browser,
        }
    }

    #[cfg(test)]
    fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    pub fn run(&self, command: Command) {
        match command {
            Command::FetchStoryPage(page) => self.spawn_stories_fetch(page),
            Command::FetchComments { story_id, kids } => self.spawn_comments_fetch(story_id, kids),
            Command::OpenUrl(url) => {
                tracing::debug!(%url, "opening in browser");
                if let Err(e) = (self.opener)(&url) {
                    tracing::warn!(%url, error = %e, "failed to open url");
                }
            }
        }
    }

    fn spawn_stories_fetch(&self, page: usize) {
        let source = self.source.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = source.fetch_story_page(page).await;
            let _ = tx.send(AsyncResult::Stories { page, result }).await;
        });
    }

    fn spawn_comments_fetch(&self, story_id: u64, kids: Vec<u64>) {
        let source = self.source.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = source.fetch_comments(kids).await;
            let _ = tx.send(AsyncResult::Comments { story_id, result }).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::api::{ApiError, Comment, StoryPage};
    use crate::test_utils::{sample_comments, story_page};

    /// Canned data source that records what was asked of it.
    #[derive(Clone, Default)]
    struct FakeSource {
        fail: bool,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl DataSource for FakeSource {
        async fn fetch_story_page(&self, page: usize) -> Result<StoryPage, ApiError> {
            self.calls.lock().unwrap().push(format!("page {page}"));
            if self.fail {
                return Err(ApiError::HttpStatus(500, "Internal Server Error".into()));
            }
            Ok(story_page(page, 3, 60))
        }

        async fn fetch_comments(&self, ids: Vec<u64>) -> Result<Vec<Comment>, ApiError> {
            self.calls.lock().unwrap().push(format!("comments {ids:?}"));
            Ok(sample_comments().into_iter().take(ids.len()).collect())
        }
    }

    fn executor(source: FakeSource) -> (Executor<FakeSource>, mpsc::Receiver<AsyncResult>) {
        let (tx, rx) = mpsc::channel(4);
        (Executor::new(source, tx), rx)
    }

    #[tokio::test]
    async fn story_fetch_reports_tagged_page() {
        let source = FakeSource::default();
        let (exec, mut rx) = executor(source.clone());

        exec.run(Command::FetchStoryPage(2));

        match rx.recv().await {
            Some(AsyncResult::Stories { page, result }) => {
                assert_eq!(page, 2);
                let loaded = tokio_test::assert_ok!(result);
                assert_eq!(loaded.stories.len(), 3);
                assert_eq!(loaded.total_ids, 60);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(*source.calls.lock().unwrap(), vec!["page 2"]);
    }

    #[tokio::test]
    async fn story_fetch_failure_is_delivered() {
        let (exec, mut rx) = executor(FakeSource {
            fail: true,
            ..Default::default()
        });

        exec.run(Command::FetchStoryPage(0));

        let Some(AsyncResult::Stories { result, .. }) = rx.recv().await else {
            panic!("expected a story result");
        };
        tokio_test::assert_err!(result);
    }

    #[tokio::test]
    async fn comments_fetch_carries_story_id() {
        let source = FakeSource::default();
        let (exec, mut rx) = executor(source.clone());

        exec.run(Command::FetchComments {
            story_id: 9,
            kids: vec![100, 101],
        });

        let Some(AsyncResult::Comments { story_id, result }) = rx.recv().await else {
            panic!("expected a comments result");
        };
        assert_eq!(story_id, 9);
        assert_eq!(result.unwrap().len(), 2);
        assert_eq!(*source.calls.lock().unwrap(), vec!["comments [100, 101]"]);
    }

    #[tokio::test]
    async fn open_failure_is_swallowed() {
        fn broken(_: &str) -> io::Result<()> {
            Err(io::Error::other("no browser"))
        }

        let source = FakeSource::default();
        let (exec, mut rx) = executor(source.clone());
        let exec = exec.with_opener(broken);

        exec.run(Command::OpenUrl("https://example.com".into()));
        drop(exec);

        assert!(rx.recv().await.is_none());
        assert!(source.calls.lock().unwrap().is_empty());
    }
}

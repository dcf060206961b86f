use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use stories_logging::{stories_debug, stories_warn};

use crate::fetch::{FetchSettings, ReqwestFetcher, StoryFetcher};
use crate::{EngineEvent, RequestId};

/// Produces the timestamp attached to each completion.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub fetched_utc: Clock,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            fetched_utc: Arc::new(String::new),
        }
    }
}

enum EngineCommand {
    Fetch { request_id: RequestId, url: String },
}

/// Runs fetches on a background tokio runtime and reports completions.
///
/// Requests run concurrently and may complete out of order; callers match
/// completions by `request_id`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> io::Result<Self> {
        let fetcher = ReqwestFetcher::new(config.fetch)
            .map_err(|err| io::Error::other(err.to_string()))?;
        Self::with_fetcher(Arc::new(fetcher), config.fetched_utc)
    }

    pub fn with_fetcher(fetcher: Arc<dyn StoryFetcher>, clock: Clock) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                let clock = clock.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx, clock).await;
                });
            }
            stories_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn StoryFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    clock: Clock,
) {
    match command {
        EngineCommand::Fetch { request_id, url } => {
            let result = fetcher.fetch(&url).await;
            if let Err(err) = &result {
                stories_warn!("Fetch request_id={} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted {
                request_id,
                result,
                fetched_utc: clock(),
            });
        }
    }
}

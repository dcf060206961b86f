use std::sync::Arc;

use stories_core::{Effect, Msg, Story};
use stories_engine::{EngineConfig, EngineEvent, EngineHandle, Hit, KeyValueStore};
use stories_logging::{stories_error, stories_info, stories_warn};

/// Executes core effects against the engine and the key-value store.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Arc<dyn KeyValueStore>,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, store: Arc<dyn KeyValueStore>) -> std::io::Result<Self> {
        let engine = EngineHandle::new(config)?;
        Ok(Self { engine, store })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchStories { request_id, url } => {
                    stories_info!("FetchStories request_id={} url={}", request_id, url);
                    self.engine.fetch(request_id, url);
                }
                Effect::PersistSearchTerm { key, value } => {
                    if let Err(err) = self.store.set(&key, &value) {
                        stories_error!("Failed to persist {}: {}", key, err);
                    }
                }
            }
        }
    }

    /// Completions that arrived since the last call, as core messages.
    pub fn drain_events(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted {
            request_id,
            result,
            fetched_utc,
        } => match result {
            Ok(page) => Msg::FetchSucceeded {
                request_id,
                hits: page.hits.into_iter().map(map_hit).collect(),
                fetched_utc: Some(fetched_utc).filter(|stamp| !stamp.is_empty()),
            },
            Err(err) => {
                stories_warn!("Request {} failed: {}", request_id, err);
                Msg::FetchFailed { request_id }
            }
        },
    }
}

fn map_hit(hit: Hit) -> Story {
    Story {
        object_id: hit.object_id.to_string(),
        title: hit.title.unwrap_or_default(),
        url: hit.url.unwrap_or_default(),
        author: hit.author.unwrap_or_default(),
        num_comments: hit.num_comments.unwrap_or_default(),
        points: hit.points.unwrap_or_default(),
    }
}

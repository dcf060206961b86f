use std::sync::Arc;
use std::time::Duration;

use stories_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, Hit, ObjectId, SearchPage, StoryFetcher,
};

struct CannedFetcher;

#[async_trait::async_trait]
impl StoryFetcher for CannedFetcher {
    async fn fetch(&self, url: &str) -> Result<SearchPage, FetchError> {
        if url.ends_with("page=0") {
            Ok(SearchPage {
                hits: vec![Hit {
                    object_id: ObjectId::Text("1".to_string()),
                    title: Some("Rust".to_string()),
                    url: None,
                    author: None,
                    num_comments: None,
                    points: None,
                }],
            })
        } else {
            Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "boom".to_string(),
            })
        }
    }
}

#[test]
fn engine_reports_completions_with_request_ids() {
    stories_logging::initialize_for_tests();
    let engine = EngineHandle::with_fetcher(
        Arc::new(CannedFetcher),
        Arc::new(|| "2024-01-01T00:00:00Z".to_string()),
    )
    .expect("engine");

    engine.fetch(1, "https://example.com/search?query=rust&page=0");
    engine.fetch(2, "https://example.com/search?query=rust&page=1");

    let mut events = Vec::new();
    while events.len() < 2 {
        let event = engine
            .recv_timeout(Duration::from_secs(5))
            .expect("completion");
        events.push(event);
    }
    events.sort_by_key(|event| match event {
        EngineEvent::FetchCompleted { request_id, .. } => *request_id,
    });

    match &events[0] {
        EngineEvent::FetchCompleted {
            request_id,
            result,
            fetched_utc,
        } => {
            assert_eq!(*request_id, 1);
            assert_eq!(result.as_ref().map(|page| page.hits.len()), Ok(1));
            assert_eq!(fetched_utc, "2024-01-01T00:00:00Z");
        }
    }
    match &events[1] {
        EngineEvent::FetchCompleted { request_id, result, .. } => {
            assert_eq!(*request_id, 2);
            assert_eq!(
                result.as_ref().map_err(|err| err.kind.clone()).err(),
                Some(FailureKind::HttpStatus(500))
            );
        }
    }
    assert!(engine.try_recv().is_none());
}

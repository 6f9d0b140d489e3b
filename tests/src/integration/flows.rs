//! # Integration Test Flows
//!
//! The BART service wired to the in-memory store and the shared bus, the same
//! way the server runtime wires it.
//!
//! ## Flows Tested:
//!
//! 1. **Upload → Bus**: a stored icon produces a `BuddyIconChanged` event
//! 2. **Upload → Retrieve**: another user fetches the icon by descriptor
//! 3. **Cleared icon**: the blank GIF is served without touching the store
//! 4. **Runtime lifecycle**: the presence handler sees every upload

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    use rc_10_bart::domain::{subgroups, FOOD_GROUP_BART};
    use rc_10_bart::test_utils::RecordingNotifier;
    use rc_10_bart::{
        BartApi, BartConfig, BartDownloadQuery, BartError, BartId, BartService, BartType,
        BartUploadQuery, InMemoryContentStore, NotifyFailurePolicy, SnacFrame, BLANK_GIF,
    };
    use server_runtime::{ServerConfig, ServerRuntime, ServiceContainer};
    use shared_bus::{EventFilter, EventTopic, PresenceEvent};
    use shared_types::entities::{ScreenName, Session};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn upload_frame(request_id: u32) -> SnacFrame {
        SnacFrame::new(FOOD_GROUP_BART, subgroups::UPLOAD_QUERY, request_id)
    }

    fn download_frame(request_id: u32) -> SnacFrame {
        SnacFrame::new(FOOD_GROUP_BART, subgroups::DOWNLOAD_QUERY, request_id)
    }

    fn download(target: &str, id: BartId) -> BartDownloadQuery {
        BartDownloadQuery {
            screen_name: ScreenName::new(target),
            id,
        }
    }

    /// A small but real GIF-ish payload
    fn icon(seed: u8) -> Vec<u8> {
        let mut data = b"GIF89a".to_vec();
        data.extend((0..64u8).map(|i| i.wrapping_mul(seed).wrapping_add(seed)));
        data
    }

    // =============================================================================
    // UPLOAD → BUS → RETRIEVE
    // =============================================================================

    #[tokio::test]
    async fn test_upload_announces_and_is_retrievable() {
        let container = ServiceContainer::new(ServerConfig::default());
        let mut relay = container
            .event_bus
            .subscribe(EventFilter::topics(vec![EventTopic::Presence]));
        let alice = Session::new("Chatty Cathy");
        let data = icon(7);

        let uploaded = container
            .bart
            .upsert_item(
                &alice,
                upload_frame(10),
                BartUploadQuery::new(BartType::BUDDY_ICON, data.clone()),
            )
            .await
            .expect("upload");

        let event = timeout(Duration::from_secs(1), relay.recv())
            .await
            .expect("event in time")
            .expect("bus open");
        assert_eq!(
            event,
            PresenceEvent::BuddyIconChanged {
                session_id: alice.id,
                screen_name: alice.screen_name.clone(),
            }
        );

        let fetched = container
            .bart
            .retrieve_item(
                &Session::new("bob"),
                download_frame(11),
                download("Chatty Cathy", uploaded.body.id.clone()),
            )
            .await
            .expect("retrieve");

        assert_eq!(fetched.body.data, data);
        assert_eq!(fetched.body.id, uploaded.body.id);
        assert_eq!(fetched.body.screen_name, ScreenName::new("Chatty Cathy"));
        assert_eq!(fetched.frame.request_id, 11);
    }

    #[tokio::test]
    async fn test_icon_change_reaches_every_subscriber() {
        let container = ServiceContainer::new(ServerConfig::default());
        let mut subs: Vec<_> = (0..3)
            .map(|_| container.event_bus.subscribe(EventFilter::all()))
            .collect();

        container
            .bart
            .upsert_item(
                &Session::new("alice"),
                upload_frame(1),
                BartUploadQuery::new(BartType::BUDDY_ICON, icon(1)),
            )
            .await
            .unwrap();

        for sub in &mut subs {
            let event = sub.try_recv().unwrap().expect("event");
            assert_eq!(event.screen_name().as_str(), "alice");
        }
    }

    #[tokio::test]
    async fn test_presence_stream_sees_upload() {
        let container = ServiceContainer::new(ServerConfig::default());
        let mut stream = container
            .event_bus
            .event_stream(EventFilter::topics(vec![EventTopic::Presence]));

        container
            .bart
            .upsert_item(
                &Session::new("alice"),
                upload_frame(1),
                BartUploadQuery::new(BartType::BUDDY_ICON, icon(2)),
            )
            .await
            .unwrap();

        let event = timeout(Duration::from_secs(1), stream.next())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event.topic(), EventTopic::Presence);
        assert_eq!(event.screen_name().as_str(), "alice");
    }

    #[tokio::test]
    async fn test_shared_icon_is_stored_once() {
        let container = ServiceContainer::new(ServerConfig::default());
        let mut relay = container.event_bus.subscribe(EventFilter::all());
        let data = icon(3);

        let mut ids = Vec::new();
        for (i, name) in ["alice", "bob"].into_iter().enumerate() {
            let reply = container
                .bart
                .upsert_item(
                    &Session::new(name),
                    upload_frame(i as u32),
                    BartUploadQuery::new(BartType::BUDDY_ICON, data.clone()),
                )
                .await
                .unwrap();
            ids.push(reply.body.id);
        }

        assert_eq!(ids[0], ids[1]);
        assert_eq!(container.content_store.len(), 1);
        assert!(relay.try_recv().unwrap().is_some());
        assert!(relay.try_recv().unwrap().is_some());
    }

    // =============================================================================
    // RETRIEVAL EDGE CASES
    // =============================================================================

    #[tokio::test]
    async fn test_cleared_icon_served_blank() {
        let container = ServiceContainer::new(ServerConfig::default());

        let reply = container
            .bart
            .retrieve_item(
                &Session::new("bob"),
                download_frame(1),
                download("alice", BartId::cleared(BartType::BUDDY_ICON)),
            )
            .await
            .unwrap();

        assert_eq!(reply.body.data, BLANK_GIF.to_vec());
        assert!(container.content_store.is_empty());
        assert_eq!(container.bart.metrics().snapshot().blank_served, 1);
    }

    #[tokio::test]
    async fn test_missing_icon_is_not_found() {
        let container = ServiceContainer::new(ServerConfig::default());
        let id = BartId::known(BartType::BUDDY_ICON, rc_10_bart::IconHash::digest(&icon(9)));

        let result = container
            .bart
            .retrieve_item(&Session::new("bob"), download_frame(1), download("alice", id))
            .await;

        assert!(matches!(result, Err(BartError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_notify_failure_tolerated_when_configured() {
        let store = Arc::new(InMemoryContentStore::new());
        let service = BartService::with_config(
            Arc::clone(&store),
            Arc::new(RecordingNotifier::failing()),
            BartConfig::default().with_notify_failure_policy(NotifyFailurePolicy::LogAndContinue),
        );
        let data = icon(4);

        let uploaded = service
            .upsert_item(
                &Session::new("alice"),
                upload_frame(1),
                BartUploadQuery::new(BartType::BUDDY_ICON, data.clone()),
            )
            .await
            .expect("upload tolerated");
        let fetched = service
            .retrieve_item(
                &Session::new("bob"),
                download_frame(2),
                download("alice", uploaded.body.id),
            )
            .await
            .unwrap();

        assert_eq!(fetched.body.data, data);
        assert_eq!(service.metrics().snapshot().notify_failures, 1);
    }

    // =============================================================================
    // RUNTIME LIFECYCLE
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_runtime_handles_concurrent_users() {
        let runtime = ServerRuntime::new(ServerConfig::default());
        runtime.start().unwrap();
        let container = runtime.container();

        let mut handles = Vec::new();
        for i in 0..20u8 {
            let container = Arc::clone(&container);
            handles.push(tokio::spawn(async move {
                let name = format!("user{i}");
                let data = icon(i);
                let uploaded = container
                    .bart
                    .upsert_item(
                        &Session::new(name.as_str()),
                        upload_frame(u32::from(i)),
                        BartUploadQuery::new(BartType::BUDDY_ICON, data.clone()),
                    )
                    .await
                    .unwrap();
                let fetched = container
                    .bart
                    .retrieve_item(
                        &Session::new("observer"),
                        download_frame(1000 + u32::from(i)),
                        download(&name, uploaded.body.id),
                    )
                    .await
                    .unwrap();
                assert_eq!(fetched.body.data, data);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(container.content_store.len(), 20);
        assert_eq!(runtime.shutdown().await, 20);
    }

    #[test]
    fn test_runtime_config_from_environment_lookup() {
        let config = ServerConfig::from_lookup(|key| match key {
            "BART_NOTIFY_POLICY" => Some("log-and-continue".into()),
            "BART_BUS_CAPACITY" => Some("8".into()),
            _ => None,
        })
        .unwrap();

        let container = ServiceContainer::new(config);

        assert_eq!(
            container.bart.config().notify_failure_policy,
            NotifyFailurePolicy::LogAndContinue
        );
        assert_eq!(container.event_bus.capacity(), 8);
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn prop_any_upload_round_trips(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
                let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
                let container = ServiceContainer::new(ServerConfig::default());

                let fetched = rt.block_on(async {
                    let uploaded = container
                        .bart
                        .upsert_item(
                            &Session::new("alice"),
                            upload_frame(1),
                            BartUploadQuery::new(BartType::BUDDY_ICON, data.clone()),
                        )
                        .await
                        .unwrap();
                    container
                        .bart
                        .retrieve_item(
                            &Session::new("bob"),
                            download_frame(2),
                            download("alice", uploaded.body.id),
                        )
                        .await
                        .unwrap()
                });

                prop_assert_eq!(fetched.body.data, data);
            }
        }
    }
}

//! BART Service
//!
//! Implements `BartApi` over an injected `ContentStore` and `PresenceNotifier`.

use async_trait::async_trait;
use shared_types::entities::Session;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{
    subgroups, BartConfig, BartDownloadQuery, BartDownloadReply, BartId, BartReplyCode,
    BartUploadQuery, BartUploadReply, IconHash, NotifyFailurePolicy, SnacFrame, SnacMessage,
    BLANK_GIF,
};
use crate::error::BartError;
use crate::metrics::BartMetrics;
use crate::ports::{BartApi, ContentStore, PresenceNotifier};

/// BART service implementation
///
/// Holds no per-request state; all concurrency control lives in the store.
pub struct BartService<S: ContentStore, N: PresenceNotifier> {
    /// Blob storage (driven port)
    store: Arc<S>,
    /// Buddy notification (driven port)
    notifier: Arc<N>,
    config: BartConfig,
    metrics: Arc<BartMetrics>,
}

impl<S: ContentStore, N: PresenceNotifier> BartService<S, N> {
    /// Create a service with the default configuration
    pub fn new(store: Arc<S>, notifier: Arc<N>) -> Self {
        Self::with_config(store, notifier, BartConfig::default())
    }

    /// Create with a custom configuration
    pub fn with_config(store: Arc<S>, notifier: Arc<N>, config: BartConfig) -> Self {
        Self {
            store,
            notifier,
            config,
            metrics: Arc::new(BartMetrics::new()),
        }
    }

    pub fn config(&self) -> &BartConfig {
        &self.config
    }

    /// Shared handle to this service's counters
    pub fn metrics(&self) -> Arc<BartMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Look up the bytes behind a known-icon descriptor.
    async fn fetch_icon(&self, id: &BartId) -> Result<Vec<u8>, BartError> {
        // A hash that is not MD5-sized was never produced by an upload
        let Some(hash) = id.icon_hash() else {
            self.metrics.record_not_found();
            return Err(BartError::NotFound {
                hash: id.hash_hex(),
            });
        };

        let icon = self.store.get(&hash).await.map_err(|e| {
            self.metrics.record_storage_failure();
            BartError::from(e)
        })?;

        icon.ok_or_else(|| {
            self.metrics.record_not_found();
            BartError::NotFound {
                hash: hash.to_hex(),
            }
        })
    }
}

#[async_trait]
impl<S, N> BartApi for BartService<S, N>
where
    S: ContentStore + 'static,
    N: PresenceNotifier + 'static,
{
    async fn upsert_item(
        &self,
        session: &Session,
        frame: SnacFrame,
        query: BartUploadQuery,
    ) -> Result<SnacMessage<BartUploadReply>, BartError> {
        let hash = IconHash::digest(&query.data);

        if let Err(e) = self.store.put(&hash, &query.data).await {
            self.metrics.record_storage_failure();
            return Err(e.into());
        }
        self.metrics.record_upload(query.data.len());

        debug!(
            screen_name = %session.screen_name,
            hash = %hash,
            size = query.data.len(),
            "successfully uploaded buddy icon"
        );

        if let Err(e) = self.notifier.announce(session).await {
            self.metrics.record_notify_failure();
            // The blob stays stored either way
            warn!(
                screen_name = %session.screen_name,
                hash = %hash,
                policy = %self.config.notify_failure_policy,
                error = %e,
                "buddy icon stored but presence notification failed"
            );
            if self.config.notify_failure_policy == NotifyFailurePolicy::Propagate {
                return Err(e.into());
            }
        }

        Ok(SnacMessage {
            frame: SnacFrame::bart_reply(&frame, subgroups::UPLOAD_REPLY),
            body: BartUploadReply {
                code: BartReplyCode::Success,
                id: BartId::known(query.bart_type, hash),
            },
        })
    }

    async fn retrieve_item(
        &self,
        session: &Session,
        frame: SnacFrame,
        query: BartDownloadQuery,
    ) -> Result<SnacMessage<BartDownloadReply>, BartError> {
        if !query.id.flags.is_known() {
            self.metrics.record_unsupported();
            return Err(BartError::UnsupportedRequest {
                flags: query.id.flags,
            });
        }

        let blank = query.id.has_clear_icon_hash();
        let icon = if blank {
            debug!(
                requester = %session.screen_name,
                target = %query.screen_name,
                "serving blank icon for cleared buddy icon"
            );
            BLANK_GIF.to_vec()
        } else {
            self.fetch_icon(&query.id).await?
        };
        self.metrics.record_download(blank);

        Ok(SnacMessage {
            frame: SnacFrame::bart_reply(&frame, subgroups::DOWNLOAD_REPLY),
            body: BartDownloadReply {
                screen_name: query.screen_name,
                id: query.id,
                data: icon,
            },
        })
    }
}

//! Inbound Ports (Driving Ports)
//!
//! The API the SNAC router calls for food group 0x10.

use async_trait::async_trait;
use shared_types::entities::Session;

use crate::domain::{
    BartDownloadQuery, BartDownloadReply, BartUploadQuery, BartUploadReply, SnacFrame,
    SnacMessage,
};
use crate::error::BartError;

/// Primary BART API (Driving Port)
///
/// Both operations are single-shot: no state is kept between calls, and
/// dropping the returned future abandons any in-flight store or notify call.
#[async_trait]
pub trait BartApi: Send + Sync {
    /// Store an uploaded icon under its MD5 and announce the change.
    ///
    /// # Errors
    /// - `BartError::Storage` if the blob could not be persisted (nothing is announced)
    /// - `BartError::Notify` if announcing failed and the policy propagates it
    async fn upsert_item(
        &self,
        session: &Session,
        frame: SnacFrame,
        query: BartUploadQuery,
    ) -> Result<SnacMessage<BartUploadReply>, BartError>;

    /// Fetch an icon by descriptor on behalf of `session`.
    ///
    /// # Errors
    /// - `BartError::UnsupportedRequest` if the descriptor flags are not `KNOWN`
    /// - `BartError::NotFound` if nothing is stored under the hash
    /// - `BartError::Storage` if the store read failed
    async fn retrieve_item(
        &self,
        session: &Session,
        frame: SnacFrame,
        query: BartDownloadQuery,
    ) -> Result<SnacMessage<BartDownloadReply>, BartError>;
}

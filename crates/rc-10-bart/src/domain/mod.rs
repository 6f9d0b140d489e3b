//! Domain Layer
//!
//! Pure buddy-icon logic: content addressing, wire descriptors, the blank
//! placeholder image, and service configuration. No I/O happens here.

pub mod blank;
pub mod config;
pub mod hash;
pub mod wire;

pub use blank::BLANK_GIF;
pub use config::{BartConfig, NotifyFailurePolicy, ParsePolicyError};
pub use hash::{IconHash, InvalidHashLength, ICON_HASH_LEN};
pub use wire::{
    BartDownloadQuery, BartDownloadReply, BartFlags, BartId, BartReplyCode, BartType,
    BartUploadQuery, BartUploadReply, SnacFrame, SnacMessage, CLEAR_ICON_HASH, FOOD_GROUP_BART,
};
pub use wire::subgroups;

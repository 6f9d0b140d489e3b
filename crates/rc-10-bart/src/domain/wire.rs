//! BART wire types.
//!
//! Field layout of the food group 0x10 SNACs this service consumes and
//! produces. Byte-level encoding belongs to the framing layer; these are the
//! decoded shapes.

use serde::{Deserialize, Serialize};
use shared_types::entities::ScreenName;
use std::fmt;

use super::hash::IconHash;

/// OSCAR food group that owns buddy icons.
pub const FOOD_GROUP_BART: u16 = 0x0010;

/// Opaque hash a client sends to say "I removed my buddy icon".
pub const CLEAR_ICON_HASH: [u8; 5] = [0x02, 0x01, 0xd2, 0x04, 0x72];

// =============================================================================
// SUBGROUPS
// =============================================================================

pub mod subgroups {
    pub const UPLOAD_QUERY: u16 = 0x0002;
    pub const UPLOAD_REPLY: u16 = 0x0003;
    pub const DOWNLOAD_QUERY: u16 = 0x0004;
    pub const DOWNLOAD_REPLY: u16 = 0x0005;
}

// =============================================================================
// DESCRIPTOR
// =============================================================================

/// Icon-type tag of a BART item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BartType(pub u16);

impl BartType {
    pub const BUDDY_ICON_SMALL: Self = Self(0x0000);
    pub const BUDDY_ICON: Self = Self(0x0001);
    pub const STATUS_STR: Self = Self(0x0002);
    pub const ARRIVE_SOUND: Self = Self(0x0003);
    pub const RICH_TEXT: Self = Self(0x0004);
    pub const SUPERBUDDY_ICON: Self = Self(0x0005);
    pub const RADIO_STATION: Self = Self(0x0006);
    pub const BUDDY_ICON_BIG: Self = Self(0x000C);
    pub const STATUS_STR_TOD: Self = Self(0x000D);
    pub const CURRENT_AV_TRACK: Self = Self(0x000F);
    pub const DEPART_SOUND: Self = Self(0x0060);
    pub const IM_CHROME: Self = Self(0x0081);
    pub const IM_SOUND: Self = Self(0x0083);
    pub const IM_CHROME_XML: Self = Self(0x0088);
    pub const IM_CHROME_IMMERS: Self = Self(0x0089);
    pub const EMOTICON_SET: Self = Self(0x0400);
}

/// Flags byte of a BART descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BartFlags(pub u8);

impl BartFlags {
    /// Icon is registered on the server under its hash.
    pub const KNOWN: Self = Self(0x00);
    pub const CUSTOM: Self = Self(0x01);
    pub const URL: Self = Self(0x02);
    pub const DATA: Self = Self(0x04);
    pub const UNKNOWN: Self = Self(0x40);
    pub const REDIRECT: Self = Self(0x80);
    pub const BANNED: Self = Self(0xC0);

    #[must_use]
    pub fn is_known(self) -> bool {
        self == Self::KNOWN
    }
}

impl fmt::Display for BartFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// A BART item descriptor: type, flags and the hash bytes as sent.
///
/// `hash` is kept as raw wire bytes because not every descriptor carries an
/// MD5: the cleared-icon marker is a 5-byte opaque value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BartId {
    pub bart_type: BartType,
    pub flags: BartFlags,
    pub hash: Vec<u8>,
}

impl BartId {
    /// Descriptor for an icon registered under `hash`.
    #[must_use]
    pub fn known(bart_type: BartType, hash: IconHash) -> Self {
        Self {
            bart_type,
            flags: BartFlags::KNOWN,
            hash: hash.into(),
        }
    }

    /// Descriptor a client sends when it has cleared its icon.
    #[must_use]
    pub fn cleared(bart_type: BartType) -> Self {
        Self {
            bart_type,
            flags: BartFlags::KNOWN,
            hash: CLEAR_ICON_HASH.to_vec(),
        }
    }

    /// Whether this descriptor signals a cleared icon.
    #[must_use]
    pub fn has_clear_icon_hash(&self) -> bool {
        self.hash == CLEAR_ICON_HASH
    }

    /// The hash as a store key, if it has the length of one.
    #[must_use]
    pub fn icon_hash(&self) -> Option<IconHash> {
        IconHash::try_from(self.hash.as_slice()).ok()
    }

    /// Hash bytes as lowercase hex, whatever their length.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        hex::encode(&self.hash)
    }
}

// =============================================================================
// FRAMES
// =============================================================================

/// SNAC header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnacFrame {
    pub food_group: u16,
    pub sub_group: u16,
    pub flags: u16,
    pub request_id: u32,
}

impl SnacFrame {
    #[must_use]
    pub fn new(food_group: u16, sub_group: u16, request_id: u32) -> Self {
        Self {
            food_group,
            sub_group,
            flags: 0,
            request_id,
        }
    }

    /// Reply frame in the BART food group echoing `request`'s request ID.
    #[must_use]
    pub fn bart_reply(request: &SnacFrame, sub_group: u16) -> Self {
        Self::new(FOOD_GROUP_BART, sub_group, request.request_id)
    }
}

/// A SNAC frame plus its decoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnacMessage<T> {
    pub frame: SnacFrame,
    pub body: T,
}

// =============================================================================
// BODIES
// =============================================================================

/// 0x10/0x02: client uploads an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BartUploadQuery {
    pub bart_type: BartType,
    pub data: Vec<u8>,
}

impl BartUploadQuery {
    #[must_use]
    pub fn new(bart_type: BartType, data: impl Into<Vec<u8>>) -> Self {
        Self {
            bart_type,
            data: data.into(),
        }
    }
}

/// Result code of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BartReplyCode {
    Success = 0x00,
    Invalid = 0x01,
    NoCustom = 0x02,
    TooSmall = 0x03,
    TooBig = 0x04,
    InvalidType = 0x05,
    Banned = 0x06,
    NotFound = 0x07,
}

impl BartReplyCode {
    #[must_use]
    pub fn is_success(self) -> bool {
        self == BartReplyCode::Success
    }
}

/// 0x10/0x03: server acknowledges an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BartUploadReply {
    pub code: BartReplyCode,
    pub id: BartId,
}

/// 0x10/0x04: client asks for another user's icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BartDownloadQuery {
    /// Whose icon is being fetched.
    pub screen_name: ScreenName,
    pub id: BartId,
}

/// 0x10/0x05: icon bytes for a download query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BartDownloadReply {
    pub screen_name: ScreenName,
    pub id: BartId,
    pub data: Vec<u8>,
}

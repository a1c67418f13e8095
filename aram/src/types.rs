// aram-rs/aram/src/types.rs

use std::convert::TryFrom;
use std::sync::Arc;

use crate::Error;
use crate::constants::{SELECT_TEMPLATE_MASK, TAG_ALL_REF_AR_DO, TAG_NEXT, TAG_REFRESH};

/// Pre-serialized response payload.
///
/// Cloning is cheap and shares the bytes. Identity is by reference:
/// two payloads built from equal bytes are still different payloads, see
/// [`Payload::same_as`].
#[derive(Debug, Clone)]
pub struct Payload(Arc<[u8]>);

impl Payload {
    /// Take ownership of `bytes` as a new payload instance.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Arc::from(bytes.into()))
    }

    /// Copy a static table into a payload.
    pub fn from_static(bytes: &'static [u8]) -> Self {
        Self(Arc::from(bytes))
    }

    /// Raw payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length payload.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when both handles point at the same payload instance.
    pub fn same_as(&self, other: &Payload) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Uppercase hex rendering, for logs.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Self(Arc::from(bytes))
    }
}

/// Response template requested by the SELECT P2 bits (b4 b3).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// File control information
    Fci = 0x00,
    /// File control parameters
    Fcp = 0x04,
    /// File management data
    Fmd = 0x08,
    /// Proprietary: answered with an empty success
    Proprietary = 0x0C,
}

impl Template {
    /// Resolve the template from a full SELECT P2 byte.
    pub fn from_p2(p2: u8) -> Result<Self, Error> {
        Self::try_from(p2 & SELECT_TEMPLATE_MASK).map_err(|_| Error::WrongParameters {
            p1: crate::constants::SELECT_BY_NAME,
            p2,
        })
    }
}

impl TryFrom<u8> for Template {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0x00 => Ok(Self::Fci),
            0x04 => Ok(Self::Fcp),
            0x08 => Ok(Self::Fmd),
            0x0C => Ok(Self::Proprietary),
            _ => Err(Error::WrongParameters {
                p1: crate::constants::SELECT_BY_NAME,
                p2: bits,
            }),
        }
    }
}

/// GET DATA tag carried in P1 || P2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataTag {
    /// Start enumerating every access rule
    AllRules,
    /// Continue an enumeration started by [`DataTag::AllRules`]
    Next,
    /// Refresh marker
    Refresh,
}

impl DataTag {
    /// Tag carried by GET DATA P1 and P2, if it is one this applet serves.
    pub const fn new(p1: u8, p2: u8) -> Option<Self> {
        match u16::from_be_bytes([p1, p2]) {
            TAG_ALL_REF_AR_DO => Some(Self::AllRules),
            TAG_NEXT => Some(Self::Next),
            TAG_REFRESH => Some(Self::Refresh),
            _ => None,
        }
    }

    /// P1 || P2 as one big-endian value.
    pub fn as_u16(&self) -> u16 {
        match self {
            Self::AllRules => TAG_ALL_REF_AR_DO,
            Self::Next => TAG_NEXT,
            Self::Refresh => TAG_REFRESH,
        }
    }

    /// P1 and P2 for this tag.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.as_u16().to_be_bytes()
    }
}

impl TryFrom<u16> for DataTag {
    type Error = Error;

    fn try_from(tag: u16) -> Result<Self, Self::Error> {
        let [p1, p2] = tag.to_be_bytes();
        Self::new(p1, p2).ok_or(Error::WrongParameters { p1, p2 })
    }
}

/// Key into the payload catalog.
///
/// `Next` has no catalog entry of its own; it resumes the payload stored
/// under `Tag(DataTag::AllRules)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Response template of a SELECT
    Template(Template),
    /// GET DATA tag
    Tag(DataTag),
}

impl From<Template> for Selector {
    fn from(t: Template) -> Self {
        Self::Template(t)
    }
}

impl From<DataTag> for Selector {
    fn from(t: DataTag) -> Self {
        Self::Tag(t)
    }
}

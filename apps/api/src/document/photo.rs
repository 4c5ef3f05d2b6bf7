use bytes::Bytes;
use serde::de::{Deserializer, Error as _};
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};

/// A resume photo over its lifecycle: unset, freshly chosen binary data that
/// has not been uploaded yet, or a resolved blob-storage URL.
///
/// `Local` exists only between the multipart upload handler receiving the file
/// and blob storage returning a URL. It must never reach the database:
/// serializing a `Local` photo is a hard error, not a silent drop.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Photo {
    #[default]
    Empty,
    Local {
        bytes: Bytes,
        mime: String,
    },
    Remote(String),
}

impl Photo {
    /// The persisted representation: `None` when unset, the URL when remote.
    /// `Local` photos have no persisted representation and must be resolved
    /// (uploaded) first.
    pub fn stored_url(&self) -> Result<Option<&str>, UnresolvedPhoto> {
        match self {
            Photo::Empty => Ok(None),
            Photo::Remote(url) => Ok(Some(url)),
            Photo::Local { .. } => Err(UnresolvedPhoto),
        }
    }
}

/// Error raised when a local (not yet uploaded) photo is about to be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("local photo data must be uploaded to blob storage before the document is saved")]
pub struct UnresolvedPhoto;

impl Serialize for Photo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.stored_url() {
            Ok(Some(url)) => serializer.serialize_some(url),
            Ok(None) => serializer.serialize_none(),
            Err(e) => Err(S::Error::custom(e)),
        }
    }
}

impl<'de> Deserialize<'de> for Photo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let url: Option<String> = Option::deserialize(deserializer)?;
        match url {
            None => Ok(Photo::Empty),
            Some(url) => {
                let url = url.trim().to_string();
                if url.is_empty() {
                    Ok(Photo::Empty)
                } else if url.starts_with("http://") || url.starts_with("https://") {
                    Ok(Photo::Remote(url))
                } else {
                    Err(D::Error::custom("photo must be an absolute URL"))
                }
            }
        }
    }
}

use bytes::Bytes;
use serde::Deserialize;

/// Image format tag attached to each record on the wire.
///
/// The upstream uses single-letter tags. Tags outside the known set decode
/// as `Unknown`; such records have no derived names and downstream
/// download/storage skips them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ImageKind {
    #[serde(rename = "j")]
    Jpg,
    #[serde(rename = "p")]
    Png,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ImageKind {
    /// File extension for this kind, or `None` for an unknown tag.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            ImageKind::Jpg => Some("jpg"),
            ImageKind::Png => Some("png"),
            ImageKind::Unknown => None,
        }
    }
}

/// Storage grouping applies only to the upstream's regular 6-character ids.
const GROUPING_ID_LEN: usize = 6;

/// One image listing record.
///
/// `body` is not part of the wire format; the download collaborator fills
/// it in after fetching the image itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageRecord {
    #[serde(rename = "t", default)]
    pub kind: ImageKind,
    #[serde(rename = "i", default)]
    pub id: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(skip)]
    pub body: Bytes,
}

impl ImageRecord {
    /// Name of the image on the download host: `{id}.{ext}`.
    ///
    /// Empty for an unknown kind, signalling "do not download".
    pub fn url_name(&self) -> String {
        match self.kind.extension() {
            Some(ext) => format!("{}.{}", self.id, ext),
            None => String::new(),
        }
    }

    /// Local file name: `{id}_{x}_{y}.{ext}`.
    ///
    /// Empty for an unknown kind, signalling "do not store".
    pub fn file_name(&self) -> String {
        match self.kind.extension() {
            Some(ext) => format!("{}_{}_{}.{}", self.id, self.x, self.y, ext),
            None => String::new(),
        }
    }

    /// Storage grouping key: the first two characters of a 6-character id,
    /// empty for any other id length.
    pub fn grouping(&self) -> &str {
        if self.id.len() == GROUPING_ID_LEN {
            self.id.get(..2).unwrap_or("")
        } else {
            ""
        }
    }
}

//! Content block data model
//!
//! Articles are ordered sequences of typed blocks. The editor stores them as
//! loose JSON records keyed by a `type` string, so the model here is a sum
//! type for the block kinds we render specially, with a raw fallback that
//! keeps unknown kinds intact for forward compatibility.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A block of an unmodeled kind: the `type` tag plus its untyped payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One editorial content unit.
///
/// Blocks have no identity beyond their position in the article; comparison
/// is full structural equality over the block value.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Heading {
        heading: String,
    },
    Quote {
        text: String,
        attribution: Option<String>,
    },
    Image {
        url: String,
        caption: Option<String>,
    },
    Other(RawBlock),
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn heading(heading: impl Into<String>) -> Self {
        Self::Heading {
            heading: heading.into(),
        }
    }

    pub fn quote(text: impl Into<String>, attribution: Option<String>) -> Self {
        Self::Quote {
            text: text.into(),
            attribution,
        }
    }

    pub fn image(url: impl Into<String>, caption: Option<String>) -> Self {
        Self::Image {
            url: url.into(),
            caption,
        }
    }

    /// The `type` tag this block serializes under.
    pub fn kind(&self) -> &str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Heading { .. } => "heading",
            Self::Quote { .. } => "quote",
            Self::Image { .. } => "image",
            Self::Other(raw) => &raw.kind,
        }
    }

    /// The textual payload used for word-level diffing, if the block has one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Paragraph { text } | Self::Quote { text, .. } => Some(text),
            Self::Other(raw) => raw.fields.get("text").and_then(Value::as_str),
            Self::Heading { .. } | Self::Image { .. } => None,
        }
    }

    /// Display text for the review UI: text, then heading, then a
    /// `[<type> block]` placeholder for blocks with no readable payload.
    pub fn display_label(&self) -> String {
        if let Some(text) = self.text()
            && !text.is_empty()
        {
            return text.to_string();
        }
        match self {
            Self::Heading { heading } if !heading.is_empty() => heading.clone(),
            _ => format!("[{} block]", self.kind()),
        }
    }

    fn to_raw(&self) -> RawBlock {
        let mut fields = Map::new();
        let kind = match self {
            Self::Paragraph { text } => {
                fields.insert("text".into(), Value::String(text.clone()));
                "paragraph"
            }
            Self::Heading { heading } => {
                fields.insert("heading".into(), Value::String(heading.clone()));
                "heading"
            }
            Self::Quote { text, attribution } => {
                fields.insert("text".into(), Value::String(text.clone()));
                if let Some(attribution) = attribution {
                    fields.insert("attribution".into(), Value::String(attribution.clone()));
                }
                "quote"
            }
            Self::Image { url, caption } => {
                fields.insert("url".into(), Value::String(url.clone()));
                if let Some(caption) = caption {
                    fields.insert("caption".into(), Value::String(caption.clone()));
                }
                "image"
            }
            Self::Other(raw) => return raw.clone(),
        };
        RawBlock {
            kind: kind.to_string(),
            fields,
        }
    }
}

/// Promote a raw record to a typed variant when the payload matches the
/// variant's schema exactly. Records with missing or extra fields stay raw so
/// that equality keeps seeing the full payload.
impl From<RawBlock> for ContentBlock {
    fn from(raw: RawBlock) -> Self {
        let mut fields = raw.fields.clone();
        let promoted = match raw.kind.as_str() {
            "paragraph" => take_string(&mut fields, "text")
                .map(|text| ContentBlock::Paragraph { text }),
            "heading" => take_string(&mut fields, "heading")
                .map(|heading| ContentBlock::Heading { heading }),
            "quote" => {
                let attribution = take_string(&mut fields, "attribution");
                take_string(&mut fields, "text")
                    .map(|text| ContentBlock::Quote { text, attribution })
            }
            "image" => {
                let caption = take_string(&mut fields, "caption");
                take_string(&mut fields, "url")
                    .map(|url| ContentBlock::Image { url, caption })
            }
            _ => None,
        };
        match promoted {
            Some(block) if fields.is_empty() => block,
            _ => ContentBlock::Other(raw),
        }
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::String(s) => Some(s),
        other => {
            // Put non-string values back so the raw fallback keeps them.
            fields.insert(key.to_string(), other);
            None
        }
    }
}

impl Serialize for ContentBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(RawBlock::deserialize(deserializer)?.into())
    }
}

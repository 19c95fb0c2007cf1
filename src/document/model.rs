use std::time::{SystemTime, UNIX_EPOCH};

use crate::document::node::Node;
use crate::foundation::error::DinkyResult;

/// Document category tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DocumentType {
    /// Plain page.
    #[default]
    Typical,
}

/// Page sizing behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LayoutMode {
    /// Width follows the render handle; height grows with content.
    #[default]
    Scalable,
    /// Page dimensions come from [`Settings::width`] / [`Settings::height`].
    Fixed,
}

/// Page settings carried by a [`Document`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sizing behavior.
    pub layout: LayoutMode,
    /// Page width with unit, `"0"` when unset.
    pub width: String,
    /// Page height with unit, `"0"` when unset.
    pub height: String,
    /// Colorspace tag.
    pub colorspace: String,
    /// Output resolution.
    pub dpi: u32,
    /// Width over height.
    pub aspect_ratio: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Scalable,
            width: "0".to_owned(),
            height: "0".to_owned(),
            colorspace: "rgb".to_owned(),
            dpi: 260,
            aspect_ratio: 0.772_727_3,
        }
    }
}

/// A parsed document: metadata plus exactly one root [`Node`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Title metadata.
    pub title: String,
    /// Author metadata.
    pub author: String,
    /// Category tag.
    pub doc_type: DocumentType,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_at: u64,
    /// Last modification time, milliseconds since the Unix epoch.
    pub modified_at: u64,
    /// Root of the node tree.
    pub body: Node,
    /// Page settings.
    pub settings: Settings,
}

impl Default for Document {
    fn default() -> Self {
        Self::build("Untitled", "Anonymous", DocumentType::Typical)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl Document {
    /// New document with an empty Panel body and default settings.
    pub fn build(title: impl Into<String>, author: impl Into<String>, doc_type: DocumentType) -> Self {
        let now = now_millis();
        Self {
            title: title.into(),
            author: author.into(),
            doc_type,
            created_at: now,
            modified_at: now,
            body: Node::default(),
            settings: Settings::default(),
        }
    }

    /// Parse `src` and attach the resulting tree as the body.
    ///
    /// On failure the document is left untouched.
    pub fn parse(&mut self, src: &str) -> DinkyResult<()> {
        self.body = crate::markup::parser::parse(src)?;
        self.modified_at = now_millis().max(self.created_at);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;

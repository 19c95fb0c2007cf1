use std::collections::BTreeMap;

/// Kind of a [`Node`], set by a `%TYPE ...%` directive or inferred from text content.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum NodeType {
    /// Vertical stack of children.
    #[default]
    Panel,
    /// Word-wrapped text block.
    Text,
    /// Section subtitle.
    Subtitle,
    /// Section title.
    Title,
    /// Video card reference.
    CardVideo,
}

impl NodeType {
    /// Directive name lookup (case-insensitive); unknown names map to [`NodeType::Panel`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "TEXT" => NodeType::Text,
            "SUBTITLE" => NodeType::Subtitle,
            "TITLE" => NodeType::Title,
            "CARD-VIDEO" | "CARDVIDEO" => NodeType::CardVideo,
            _ => NodeType::Panel,
        }
    }

    /// Canonical directive name.
    pub fn name(self) -> &'static str {
        match self {
            NodeType::Panel => "ANY",
            NodeType::Text => "TEXT",
            NodeType::Subtitle => "SUBTITLE",
            NodeType::Title => "TITLE",
            NodeType::CardVideo => "CARD-VIDEO",
        }
    }
}

/// Element of the document tree; children are owned by value.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Node kind.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// `!key=value` style directives.
    pub styling: BTreeMap<String, String>,
    /// Flattened text content with spaces collapsed.
    pub text: String,
    /// `%TYPE key:value%` media parameters.
    pub params: BTreeMap<String, String>,
    /// Ordered children.
    pub children: Vec<Node>,
}

impl Node {
    /// Empty node of the given type.
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            ..Self::default()
        }
    }

    /// Numeric style value; `0.0` when absent or not a finite number.
    pub fn style_number(&self, key: &str) -> f32 {
        self.styling
            .get(key)
            .and_then(|v| v.trim().parse::<f32>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Boolean style value: `"true"` in any case is true, everything else false.
    pub fn style_bool(&self, key: &str) -> bool {
        self.styling
            .get(key)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }

    /// Raw style value.
    pub fn style_str(&self, key: &str) -> Option<&str> {
        self.styling.get(key).map(String::as_str)
    }

    /// Raw directive parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// `true` when the style key is present, with or without a value.
    pub fn has_style(&self, key: &str) -> bool {
        self.styling.contains_key(key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/node.rs"]
mod tests;

//! Picker rows.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// One selectable row.
///
/// Rows arrive either as bare labels or as `{ label, disabled }` records and are
/// normalised into this shape once, when the picker is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawItem")]
pub struct Item {
    pub label: String,
    pub disabled: bool,
}

impl Item {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    /// A row that is rendered but can never be selected.
    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: true,
        }
    }

    pub fn is_selectable(&self) -> bool {
        !self.disabled
    }

    /// Terminal column width of the label.
    pub fn display_width(&self) -> usize {
        self.label.width()
    }
}

impl From<&str> for Item {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Item {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// Wire shapes accepted for a row.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
    Record {
        label: RawLabel,
        #[serde(default)]
        disabled: bool,
    },
    Label(RawLabel),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<RawLabel> for String {
    fn from(label: RawLabel) -> Self {
        match label {
            RawLabel::Text(text) => text,
            RawLabel::Integer(n) => n.to_string(),
            RawLabel::Float(n) => n.to_string(),
        }
    }
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        match raw {
            RawItem::Record { label, disabled } => Self {
                label: label.into(),
                disabled,
            },
            RawItem::Label(label) => Self::new(String::from(label)),
        }
    }
}

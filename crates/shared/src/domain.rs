use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ProductId);

/// A catalog entry as delivered by the remote source. Fields the browser does
/// not display are dropped during decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum CategorySelection {
    #[default]
    Any,
    Named(String),
}

impl CategorySelection {
    /// Maps a selector value to a selection. An empty value is the implicit
    /// "any" entry of the selector.
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() {
            Self::Any
        } else {
            Self::Named(label.to_string())
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Named(label) => Some(label.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub category: CategorySelection,
}

impl FilterState {
    pub fn new(search_text: impl Into<String>, category: CategorySelection) -> Self {
        Self {
            search_text: search_text.into(),
            category,
        }
    }
}

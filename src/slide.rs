use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// A single label/value pair of a `Stats` slide, e.g. ("Recycling rate", "+38%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Renderable body of a slide. The deck controller never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlideContent {
    Bullets {
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        items: Vec<String>,
    },
    Stats {
        items: Vec<Stat>,
    },
    // Display-only strings, nothing is ever requested
    Endpoints {
        #[serde(default)]
        base_url: Option<String>,
        routes: Vec<String>,
    },
    Image {
        path: PathBuf,
        #[serde(default)]
        caption: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub content: SlideContent,
}

impl Slide {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: SlideContent) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
        }
    }

    pub fn bullets(id: &str, title: &str, subtitle: Option<&str>, items: &[&str]) -> Self {
        Self::new(
            id,
            title,
            SlideContent::Bullets {
                subtitle: subtitle.map(str::to_string),
                items: items.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    /// Image referenced by this slide, if any.
    pub fn image_path(&self) -> Option<&PathBuf> {
        match &self.content {
            SlideContent::Image { path, .. } => Some(path),
            _ => None,
        }
    }
}

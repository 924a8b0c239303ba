use serde::{Deserialize, Serialize};
use std::fmt;

/// How demanding a recipe is to cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instruction of a recipe.
///
/// In JSON a step is either a plain string or an object with a label and
/// nested substeps:
///
/// ```json
/// ["Boil water", {"text": "Cook pasta", "substeps": ["Add pasta", "Drain"]}]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Text(String),
    Group { text: String, substeps: Vec<Step> },
}

impl Step {
    pub fn text(text: impl Into<String>) -> Self {
        Step::Text(text.into())
    }

    pub fn group(text: impl Into<String>, substeps: Vec<Step>) -> Self {
        Step::Group {
            text: text.into(),
            substeps,
        }
    }

    /// The instruction itself, or the group label
    pub fn label(&self) -> &str {
        match self {
            Step::Text(text) => text,
            Step::Group { text, .. } => text,
        }
    }

    /// Nested steps; empty for plain instructions
    pub fn substeps(&self) -> &[Step] {
        match self {
            Step::Text(_) => &[],
            Step::Group { substeps, .. } => substeps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    /// Total time in minutes
    pub time: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

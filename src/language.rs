//! Source languages known to the fact model.

use crate::error::{ExtractionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "Visual Basic")]
    VisualBasic,
}

impl Language {
    /// Parse the persisted language tag. Unknown tags fall back to C#.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Visual Basic" | "VB" | "vb" | "vbnet" => Language::VisualBasic,
            _ => Language::CSharp,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Language::CSharp => "C#",
            Language::VisualBasic => "Visual Basic",
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "cs" => Some(Language::CSharp),
            "vb" => Some(Language::VisualBasic),
            _ => None,
        }
    }

    /// Tree-sitter grammar for this language.
    pub fn grammar(&self) -> Result<tree_sitter::Language> {
        match self {
            Language::CSharp => Ok(tree_sitter_c_sharp::LANGUAGE.into()),
            Language::VisualBasic => Err(ExtractionError::UnsupportedLanguage(
                self.tag().to_string(),
            )),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

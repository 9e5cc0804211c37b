//! Website categories and the list filter

use crate::error::FolioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of categories a website can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Game", alias = "게임")]
    Game,
    #[serde(rename = "MBTI")]
    Mbti,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 2] = [Category::Game, Category::Mbti];

    /// Canonical label, as stored in snapshots
    pub fn label(&self) -> &'static str {
        match self {
            Category::Game => "Game",
            Category::Mbti => "MBTI",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "game" | "게임" => Ok(Category::Game),
            "mbti" => Ok(Category::Mbti),
            _ => Err(FolioError::UnknownCategory(s.to_string())),
        }
    }
}

/// Which entries a listing should include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed == "전체" {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(trimmed).map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => fmt::Display::fmt(c, f),
        }
    }
}

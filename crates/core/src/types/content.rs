//! Site content document (`content.json`).
//!
//! Consumed by page rendering only; the engines never mutate it.

use serde::{Deserialize, Serialize};

/// Top-level content document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentDoc {
    pub hero: Hero,
    pub about: About,
    pub footer: Footer,
}

/// Hero banner text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    /// Call-to-action button label.
    pub cta: String,
}

/// About section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub text: String,
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Footer links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub policies: Vec<PolicyLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyLink {
    pub name: String,
    pub url: String,
}

//! YouTube URL parsing.

use crate::error::{Result, VidsumError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Matches watch, embed, /v/ and youtu.be links. The ID must be followed by
/// end of input, `&`, `?`, `/` or a space.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?x)
        (?:https?://)?
        (?:www\.)?
        (?:
            youtube\.com/
            (?:
                watch\?(?:[^"\s]*&)?v=
                | embed/
                | v/
            )
            | youtu\.be/
        )
        ([^"&?/\ ]{11})
        (?:[&?/\ ]|$)
    "#,
    )
    .expect("video id pattern is valid")
});

/// An 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Extract a video ID from a YouTube URL. The first match wins.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        VIDEO_ID_RE
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| VideoId(m.as_str().to_string()))
            .ok_or_else(|| {
                VidsumError::InvalidInput(format!("no YouTube video ID found in '{}'", input))
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for VideoId {
    type Err = VidsumError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

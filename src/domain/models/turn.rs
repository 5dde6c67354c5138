#[cfg(test)]
#[path = "turn_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::Author;

/// One message in the conversation. Turns are immutable once appended to a
/// session's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub author: Author,
    parts: Vec<String>,
}

impl Turn {
    pub fn new(author: Author, text: &str) -> Turn {
        return Turn {
            author,
            parts: vec![text.to_string()],
        };
    }

    pub fn parts(&self) -> &[String] {
        return &self.parts;
    }

    /// Joined text of all segments, the way the transcript displays it.
    pub fn text(&self) -> String {
        return self.parts.join("\n");
    }
}

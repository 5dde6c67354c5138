#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use super::Markdown;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::Turn;

fn author_label(author: Author) -> (String, Color) {
    match author {
        Author::User => return (Config::get(ConfigKey::Username), Color::Cyan),
        Author::Model => return ("Gemini".to_string(), Color::Green),
    }
}

pub struct Transcript {}

impl Transcript {
    /// Projects the session history into the lines the chat pane scrolls
    /// over. Each turn gets a labelled header followed by its rendered text.
    pub fn as_lines(turns: &[Turn], max_width: usize) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = vec![];

        for turn in turns {
            let (label, color) = author_label(turn.author);
            lines.push(Line::from(Span::styled(
                label,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            lines.append(&mut Markdown::render(&turn.text(), max_width));
            lines.push(Line::from(" ".to_string()));
        }

        return lines;
    }
}

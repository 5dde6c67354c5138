#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

fn wrap_line(full_line: &str, line_max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = vec![];
    let mut char_count = 0;
    let mut current_line: Vec<&str> = vec![];

    for word in full_line.split(' ') {
        if word.len() + char_count + 1 > line_max_width && !current_line.is_empty() {
            lines.push(current_line.join(" ").trim_end().to_string());
            current_line = vec![word];
            char_count = word.len() + 1;
        } else {
            current_line.push(word);
            char_count += word.len() + 1;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" ").trim_end().to_string());
    }

    return lines;
}

fn line_style(line: &str) -> Style {
    if line.trim_start().starts_with('#') {
        return Style::default().add_modifier(Modifier::BOLD);
    }

    return Style::default();
}

pub struct Markdown {}

impl Markdown {
    /// Projects markdown-ish text into styled lines wrapped to the given
    /// width. Fenced code blocks keep their own color and are never wrapped,
    /// headings are emphasized, everything else renders as wrapped text.
    pub fn render(text: &str, max_width: usize) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = vec![];
        let mut in_codeblock = false;

        for raw_line in text.replace('\t', "  ").split('\n') {
            if raw_line.trim().starts_with("```") {
                in_codeblock = !in_codeblock;
                lines.push(Line::from(Span::styled(
                    raw_line.trim().to_string(),
                    Style::default().fg(Color::DarkGray),
                )));
                continue;
            }

            if in_codeblock {
                lines.push(Line::from(Span::styled(
                    raw_line.to_string(),
                    Style::default().fg(Color::Yellow),
                )));
                continue;
            }

            if raw_line.trim().is_empty() {
                lines.push(Line::from(" ".to_string()));
                continue;
            }

            let style = line_style(raw_line);
            for wrapped in wrap_line(raw_line, max_width) {
                lines.push(Line::from(Span::styled(wrapped, style)));
            }
        }

        return lines;
    }
}

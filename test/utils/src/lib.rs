use ratatui::text::Line;

/// Flattens rendered lines to plain text for assertions, dropping styling.
pub fn lines_to_text(lines: &[Line]) -> String {
    return lines
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| {
                    return span.content.to_string();
                })
                .collect::<Vec<String>>()
                .join("");
        })
        .collect::<Vec<String>>()
        .join("\n");
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::NetworkInfo;
use crate::domain::models::NewsItem;
use crate::domain::models::PanelState;
use crate::domain::models::Project;
use crate::domain::models::MAX_NEWS_ENTRIES;
use crate::domain::models::MAX_PROJECT_ENTRIES;

fn muted(text: String) -> Line<'static> {
    return Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)));
}

fn emphasized(text: String, color: Color) -> Line<'static> {
    return Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
}

fn failed(prefix: &str, message: &str) -> Vec<Line<'static>> {
    return vec![Line::from(Span::styled(
        format!("{prefix}: {message}"),
        Style::default().fg(Color::Red),
    ))];
}

/// Pure projections from panel state to the lines each dashboard pane shows.
/// All list caps live here.
pub struct Dashboard {}

impl Dashboard {
    pub fn network_info_lines(state: &PanelState<NetworkInfo>) -> Vec<Line<'static>> {
        match state {
            PanelState::Loading => {
                return vec![muted("Looking up your network info...".to_string())]
            }
            PanelState::Failed(message) => {
                return failed("Could not load network info", message);
            }
            PanelState::Populated(info) => {
                return vec![
                    muted("IP Address".to_string()),
                    emphasized(info.ip.to_string(), Color::Cyan),
                    muted("ISP / Organization".to_string()),
                    Line::from(info.organization()),
                    muted("Location".to_string()),
                    Line::from(info.location()),
                ];
            }
        }
    }

    pub fn project_lines(state: &PanelState<Vec<Project>>) -> Vec<Line<'static>> {
        match state {
            PanelState::Loading => {
                return vec![muted("Loading projects from GitHub...".to_string())]
            }
            PanelState::Failed(message) => {
                return failed("Could not load GitHub projects", message);
            }
            PanelState::Populated(projects) => {
                let mut lines = vec![muted(format!("{} items", projects.len()))];
                for project in projects.iter().take(MAX_PROJECT_ENTRIES) {
                    lines.push(emphasized(project.name.to_string(), Color::White));
                    lines.push(Line::from(project.blurb()));
                }

                return lines;
            }
        }
    }

    pub fn news_lines(state: &PanelState<Vec<NewsItem>>) -> Vec<Line<'static>> {
        match state {
            PanelState::Loading => {
                return vec![muted("Loading the latest security news...".to_string())]
            }
            PanelState::Failed(message) => {
                return failed("Could not load security news", message);
            }
            PanelState::Populated(items) => {
                let mut lines = vec![];
                for item in items.iter().take(MAX_NEWS_ENTRIES) {
                    lines.push(emphasized(item.title.to_string(), Color::White));
                    lines.push(muted(format!("Published: {}", item.published())));
                }

                return lines;
            }
        }
    }
}

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::SlashCommand;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::help_text;
use crate::domain::services::AppState;
use crate::domain::services::Dashboard;
use crate::domain::services::Transcript;

fn render_pane<B: Backend>(frame: &mut Frame<B>, rect: Rect, title: &str, lines: Vec<Line<'static>>) {
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .wrap(Wrap { trim: false }),
        rect,
    );
}

fn render_frame<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &mut AppState,
    textarea: &tui_textarea::TextArea<'_>,
    loading: &Loading,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Min(50), Constraint::Length(44)])
        .split(frame.size());

    let status = app_state.status_line();
    let mut chat_constraints = vec![Constraint::Min(1)];
    if status.is_some() {
        chat_constraints.push(Constraint::Length(1));
    }
    chat_constraints.push(Constraint::Max(4));

    let chat = Layout::default()
        .direction(Direction::Vertical)
        .constraints(chat_constraints)
        .split(columns[0]);

    let transcript_rect = chat[0];
    let line_width = usize::from(transcript_rect.width.saturating_sub(2).max(1));
    let lines = Transcript::as_lines(app_state.session.history(), line_width);
    app_state
        .scroll
        .set_state(lines.len() as u16, transcript_rect.height.saturating_sub(2));
    if app_state.follow {
        app_state.scroll.last();
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Gemini Playground ({})",
                app_state.session.model()
            )))
            .scroll((app_state.scroll.position, 0)),
        transcript_rect,
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        transcript_rect.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.scroll.scrollbar_state,
    );

    if app_state.showing_help {
        frame.render_widget(Clear, transcript_rect);
        frame.render_widget(
            Paragraph::new(help_text())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .title("Help"),
                )
                .wrap(Wrap { trim: false }),
            transcript_rect,
        );
    }

    if let Some((text, is_error)) = status {
        let color = if is_error { Color::Red } else { Color::DarkGray };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(color)),
            chat[1],
        );
    }

    let input_rect = chat[chat.len() - 1];
    if app_state.session.in_flight() {
        loading.render(frame, input_rect);
    } else {
        frame.render_widget(textarea.widget(), input_rect);
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(8),
            Constraint::Percentage(55),
            Constraint::Min(1),
        ])
        .split(columns[1]);

    render_pane(
        frame,
        rows[0],
        "Network Info",
        Dashboard::network_info_lines(&app_state.network_info),
    );
    render_pane(
        frame,
        rows[1],
        "Projects",
        Dashboard::project_lines(&app_state.projects),
    );
    render_pane(
        frame,
        rows[2],
        "Security News (Top 5)",
        Dashboard::news_lines(&app_state.news),
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    events: &mut EventsService,
    tx: mpsc::UnboundedSender<Action>,
) -> Result<()> {
    let mut textarea = TextArea::default();
    textarea.insert_str(app_state.session.pending_input());
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    if app_state.session.pending_input().is_empty() {
        textarea.insert_str("Summarize the top security news in one sentence each.");
    }

    loop {
        terminal.draw(|frame| {
            render_frame(frame, app_state, &textarea, &loading);
        })?;

        match events.next().await? {
            Event::KeyboardCTRLC() => break,
            Event::KeyboardEsc() => {
                app_state.dismiss();
            }
            Event::KeyboardEnter() => {
                let input_str = textarea.lines().join("\n");
                if input_str.trim().is_empty() {
                    continue;
                }

                if let Some(command) = SlashCommand::parse(&input_str) {
                    if command.is_quit() {
                        break;
                    }

                    app_state.handle_command(&command).await?;
                    textarea = TextArea::default();
                    continue;
                }

                if app_state.submit(Some(&input_str), &tx)? {
                    textarea = TextArea::default();
                }
            }
            Event::KeyboardAltDigit(number) => {
                if app_state.submit_suggestion(number, &tx)? {
                    textarea = TextArea::default();
                }
            }
            Event::KeyboardPaste(text) => {
                textarea.insert_str(text.replace('\r', "\n"));
            }
            Event::KeyboardCharInput(input) => {
                if !app_state.session.in_flight() {
                    textarea.input(input);
                }
            }
            Event::GenerationCompleted(reply) => {
                app_state.handle_generation_completed(reply);
            }
            Event::GenerationFailed(message) => {
                app_state.handle_generation_failed(&message);
            }
            Event::PanelLoaded(kind, result) => {
                app_state.handle_panel_loaded(kind, result);
            }
            Event::UIScrollDown() => {
                app_state.scroll_down();
            }
            Event::UIScrollUp() => {
                app_state.scroll_up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll_page_down();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll_page_up();
            }
            Event::UITick() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )
    .unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut app_state = AppState::new(&tx)?;
    let mut events = EventsService::new(rx);

    start_loop(&mut terminal, &mut app_state, &mut events, tx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}

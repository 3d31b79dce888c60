//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Main menu with the highlighted operation
//! - Prompt box for file paths and raw sequences
//! - Scrollable result viewer, wrapped to the terminal width
//! - Status bar with mode, messages and the active codon table

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{AppState, Operation, Prompt, ResultsView, Screen};

/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;
/// Borders around the content block (left + right, top + bottom).
const BORDER_SIZE: u16 = 2;

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: content area + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let content_area = main_layout[0];
    let status_area = main_layout[1];

    match &state.screen {
        Screen::Menu => render_menu(frame, state, content_area),
        Screen::Prompt(prompt) => render_prompt(frame, prompt, content_area),
        Screen::Results(view) => render_results(frame, view, content_area),
    }
    render_status_bar(frame, state, status_area);
}

fn render_menu(frame: &mut Frame, state: &AppState, area: Rect) {
    let lines: Vec<Line> = Operation::ALL
        .iter()
        .enumerate()
        .map(|(idx, operation)| {
            if idx == state.selected {
                Line::from(Span::styled(
                    format!("> {}", operation.label()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", operation.label()),
                    Style::default().fg(Color::White),
                ))
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Sequence Analysis Tool");

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_prompt(frame: &mut Frame, prompt: &Prompt, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    // Fields already answered
    for (question, answer) in prompt.operation.prompts().iter().zip(&prompt.answers) {
        lines.push(Line::from(Span::styled(
            *question,
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            answer.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(Span::styled(
        prompt.question(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::raw(prompt.input.clone()),
        Span::styled(" ", Style::default().bg(Color::White)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(prompt.operation.label());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_results(frame: &mut Frame, view: &ResultsView, area: Rect) {
    let visible_rows = area.height.saturating_sub(BORDER_SIZE) as usize;

    let total = view.lines().len();
    let lines: Vec<Line> = view
        .lines()
        .iter()
        .skip(view.scroll)
        .take(visible_rows)
        .map(|line| Line::from(line.as_str()))
        .collect();

    let last_visible = (view.scroll + visible_rows).min(total);
    let title = format!(
        "{} [{}-{}/{}]",
        view.report.title(),
        (view.scroll + 1).min(total),
        last_visible,
        total
    );

    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let (mode_str, hint) = match &state.screen {
        Screen::Menu => ("MENU", "Enter: run | t: codon table | q: quit"),
        Screen::Prompt(_) => ("INPUT", "Enter: confirm | Esc: back"),
        Screen::Results(_) => ("RESULTS", "j/k: scroll | w: export | q: back"),
    };

    let message = state.status_message.as_deref().unwrap_or(hint);
    let left_content = format!(" {} | {} ", mode_str, message);
    let table_info = format!("Codon table: {} ", state.table);

    let left_len = left_content.chars().count();
    let status_line = Line::from(vec![
        Span::styled(
            left_content,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + table_info.len())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            table_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

/// Calculates the visible dimensions of the content block.
pub fn calculate_visible_dimensions(terminal_width: u16, terminal_height: u16) -> (usize, usize) {
    // Account for borders and status bar
    let visible_cols = terminal_width.saturating_sub(BORDER_SIZE) as usize;
    let visible_rows = terminal_height.saturating_sub(STATUS_BAR_HEIGHT + BORDER_SIZE) as usize;
    (visible_rows, visible_cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::genetic_code::TableChoice;

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_visible_dimensions() {
        let (rows, cols) = calculate_visible_dimensions(100, 50);
        // 100 - 2 (borders) = 98 cols
        // 50 - 1 (status) - 2 (borders) = 47 rows
        assert_eq!(cols, 98);
        assert_eq!(rows, 47);
    }

    #[test]
    fn test_menu_lists_operations() {
        let state = AppState::new(TableChoice::Reference, std::env::temp_dir());
        let screen = draw(&state, 100, 12);

        assert!(screen.contains("> Analyze DNA"));
        assert!(screen.contains("Translate RNA to Protein"));
        assert!(screen.contains("Codon table: Reference (partial)"));
    }

    #[test]
    fn test_results_are_rendered() {
        let mut state = AppState::new(TableChoice::Reference, std::env::temp_dir());
        let (rows, cols) = calculate_visible_dimensions(60, 12);
        state.update_viewport_size(rows, cols);
        state.selected = 4;
        state.select_menu_item();
        for c in "ATGCTA".chars() {
            state.prompt_input(c);
        }
        state.submit_prompt();

        let screen = draw(&state, 60, 12);
        assert!(screen.contains("Transcription Results"));
        assert!(screen.contains("RNA: AUGCUA"));
    }
}

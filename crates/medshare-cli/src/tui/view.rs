use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::PickerState;
use medshare_core::matcher::SearchOutcome;

pub fn render_picker(f: &mut Frame, state: &PickerState, placeholder: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // input
            Constraint::Min(1),    // results
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    let input_border = match state.outcome {
        SearchOutcome::Cleared => Color::Gray,
        SearchOutcome::NoMatches => Color::Red,
        SearchOutcome::Matches(_) => Color::Cyan,
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::raw(&state.query),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(input_border))
            .title("Medicine"),
    );
    f.render_widget(input, chunks[0]);

    let cursor_x = chunks[0].x + 2 + state.query.chars().count() as u16;
    let cursor_y = chunks[0].y + 1;
    f.set_cursor_position((cursor_x, cursor_y));

    let items: Vec<ListItem> = match &state.outcome {
        SearchOutcome::Cleared => vec![ListItem::new(Span::styled(
            "Start typing to search medicines",
            Style::default().fg(Color::DarkGray),
        ))],
        SearchOutcome::NoMatches => vec![ListItem::new(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ))],
        SearchOutcome::Matches(matches) => matches
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let style = if i == state.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let prefix = if i == state.selected { "> " } else { "  " };
                let mut spans = vec![Span::styled(prefix, style)];
                if state.multi {
                    let mark = if state.chosen.contains(&m.index) { "[x] " } else { "[ ] " };
                    spans.push(Span::styled(mark, Style::default().fg(Color::Green)));
                }
                spans.push(Span::styled(&m.name, style));
                spans.push(Span::styled(
                    format!("  {}", m.score),
                    Style::default().fg(Color::DarkGray),
                ));
                ListItem::new(Line::from(spans))
            })
            .collect(),
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Matches"));
    f.render_widget(list, chunks[1]);

    let mut status = vec![Span::styled(
        format!(
            " {}/{} ",
            state.outcome.matches().len(),
            state.catalog.len()
        ),
        Style::default().fg(Color::Cyan),
    )];
    if state.multi {
        status.push(Span::styled(
            format!("{} chosen ", state.chosen.len()),
            Style::default().fg(Color::Green),
        ));
        status.push(Span::styled(
            " | ESC: cancel | TAB: toggle | Enter: confirm",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        status.push(Span::styled(
            " | ESC: cancel | Enter: select",
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(status)), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use medshare_core::catalog::Catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(state: &PickerState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal
            .draw(|f| render_picker(f, state, "No medicines found"))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_placeholder_when_nothing_matches() {
        let catalog = Catalog::builtin();
        let mut state = PickerState::new(&catalog, false);
        for c in "qqq".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        assert!(screen(&state).contains("No medicines found"));
    }

    #[test]
    fn renders_ranked_names() {
        let catalog = Catalog::builtin();
        let mut state = PickerState::new(&catalog, true);
        for c in "insulin".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        state.handle_key(KeyCode::Tab);

        let screen = screen(&state);
        assert!(screen.contains("> [x] Insulin  100"));
        assert!(screen.contains("1 chosen"));
    }
}

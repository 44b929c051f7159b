use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_complete(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "✓ Quiz Complete",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "You scored {} out of {}",
            state.score,
            state.total()
        )),
        Line::from(""),
    ];

    if state.new_best {
        lines.push(Line::from(Span::styled(
            "★ New high score!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        let best = match state.best_score {
            Some(best) => format!("High score: {}", best),
            None => "No high score yet".to_string(),
        };
        lines.push(Line::from(Span::styled(
            best,
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[R] Restart", Style::default().fg(Color::Cyan)),
        Span::raw("    "),
        Span::styled("[Enter] Exit", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(widget, area);
}

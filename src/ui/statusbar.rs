use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(area);

    // Progress over the whole run: questions already left behind.
    let total = state.total();
    let ratio = if total > 0 {
        state.current as f64 / total as f64
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .ratio(ratio)
        .label(format!("{}/{}", state.current, total))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Rgb(30, 30, 30)));
    f.render_widget(gauge, chunks[0]);

    let best = match state.best_score {
        Some(best) => format!("best {}", best),
        None => "no best yet".to_string(),
    };
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("score {}", state.score),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled(best, Style::default().fg(Color::Yellow)),
    ]);

    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, chunks[1]);
}

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let timer_str = format!(" {}s left ", state.seconds_left);
    let timer_text = if state.seconds_left <= 3 {
        Span::styled(
            timer_str.clone(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(timer_str.clone(), Style::default().fg(Color::Rgb(200, 200, 120)))
    };

    let title_text = "[ termtrivia ]".to_string();
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Center the title; the countdown sits flush right.
    let available = area.width as usize;
    let title_len = title_text.len();
    let center_pad = if available > title_len {
        (available - title_len) / 2
    } else {
        0
    };
    let right_pad = available.saturating_sub(center_pad + title_len + timer_str.len());

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        timer_text,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::AppState;

/// Wrap text to fit within `width` columns, breaking at word boundaries.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            result.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    if result.is_empty() {
        result.push(String::new());
    }
    result
}

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(question) = state.current_question() else {
        let p = Paragraph::new("No questions").block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    // Header
    lines.push(Line::from(Span::styled(
        format!("  Question {} of {}", state.current + 1, state.total()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {} · {}", question.category, question.difficulty),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    // Prompt (with wrapping)
    let wrap_width = (area.width as usize).saturating_sub(4);
    for wline in wrap_text(&question.prompt, wrap_width) {
        lines.push(Line::from(Span::styled(
            format!("  {}", wline),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));

    // Choices, in their stable sorted order
    let answered = state.selected.is_some();
    for (i, choice) in question.choices().iter().enumerate() {
        let letter = (b'a' + i as u8) as char;
        let is_selected = state.selected.as_deref() == Some(choice.as_str());
        let is_cursor = !answered && i == state.choice_cursor;

        let radio = if is_selected { "(●)" } else { "( )" };
        let marker = if is_cursor { "▸ " } else { "  " };

        let style = if is_selected {
            if *choice == question.correct_answer {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
        } else if answered {
            Style::default().fg(Color::DarkGray)
        } else if is_cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let prefix = format!("{}{} {}. ", marker, radio, letter);
        let prefix_len = prefix.len();
        let text_width = (area.width as usize).saturating_sub(prefix_len);
        let wrapped = wrap_text(choice, text_width);
        for (li, wline) in wrapped.iter().enumerate() {
            if li == 0 {
                lines.push(Line::from(vec![
                    Span::styled(prefix.clone(), style),
                    Span::styled(wline.clone(), style),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(prefix_len)),
                    Span::styled(wline.clone(), style),
                ]));
            }
        }
    }

    // Next is only offered once an answer exists; the timer advances
    // unanswered questions on its own.
    lines.push(Line::from(""));
    if answered {
        let verdict = if state.selected.as_deref() == Some(question.correct_answer.as_str()) {
            Span::styled("  ✓ Correct", Style::default().fg(Color::Green))
        } else {
            Span::styled("  ✗ Incorrect", Style::default().fg(Color::Red))
        };
        lines.push(Line::from(verdict));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  [Enter] Next",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines);
    f.render_widget(widget, area);
}

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::model::Question;
use crate::state::{AppState, Screen};
use crate::timer::{Countdown, TimerEvent, QUESTION_SECONDS};

pub fn run_tui(mut state: AppState, load_rx: mpsc::Receiver<Vec<Question>>) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let mut countdown: Option<Countdown> = None;

    let result = main_loop(&mut terminal, &mut state, &load_rx, &mut countdown);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    load_rx: &mpsc::Receiver<Vec<Question>>,
    countdown: &mut Option<Countdown>,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        // Questions arriving ends the loading screen and starts the clock.
        if state.screen == Screen::Loading {
            if let Ok(questions) = load_rx.try_recv() {
                state.begin(questions);
                *countdown = Some(Countdown::start(QUESTION_SECONDS));
            }
        }

        // Poll for input events
        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            match event::read().map_err(|e| format!("Read error: {}", e))? {
                Event::Key(key) => handle_key(key, state, countdown),
                _ => {}
            }
        }

        // Handle timer events. Draining and mutating here keeps ticks and
        // key handling serialized on this thread.
        let mut expired = false;
        if let Some(cd) = countdown.as_ref() {
            while let Ok(ev) = cd.rx.try_recv() {
                match ev {
                    TimerEvent::Tick(secs) => state.seconds_left = secs,
                    TimerEvent::Expired => expired = true,
                }
            }
        }
        if expired {
            // Auto-skip: advance even with no selection.
            state.advance();
            reset_countdown(state, countdown);
        }
    }

    Ok(())
}

/// Fresh 10-second window after any index change; no timer outside Playing.
fn reset_countdown(state: &AppState, countdown: &mut Option<Countdown>) {
    *countdown = match state.screen {
        Screen::Playing => Some(Countdown::start(QUESTION_SECONDS)),
        _ => None,
    };
}

fn handle_key(key: KeyEvent, state: &mut AppState, countdown: &mut Option<Countdown>) {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    match state.screen {
        Screen::Loading => {}
        Screen::Playing => handle_playing_key(key, state, countdown),
        Screen::Complete => handle_complete_key(key, state, countdown),
    }
}

fn handle_playing_key(key: KeyEvent, state: &mut AppState, countdown: &mut Option<Countdown>) {
    match key.code {
        KeyCode::Up => state.cursor_up(),
        KeyCode::Down => state.cursor_down(),
        KeyCode::Char(c) if c.is_ascii_lowercase() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            // 'n' advances once an answer exists; letters pick a choice.
            if c == 'n' && state.selected.is_some() {
                state.advance();
                reset_countdown(state, countdown);
                return;
            }
            let idx = (c as u8 - b'a') as usize;
            select_choice(state, idx);
        }
        KeyCode::Enter => {
            if state.selected.is_some() {
                state.advance();
                reset_countdown(state, countdown);
            } else {
                select_choice(state, state.choice_cursor);
            }
        }
        _ => {}
    }
}

fn handle_complete_key(key: KeyEvent, state: &mut AppState, countdown: &mut Option<Countdown>) {
    match key.code {
        KeyCode::Char('r') => {
            state.restart();
            reset_countdown(state, countdown);
        }
        KeyCode::Enter => {
            state.should_quit = true;
        }
        _ => {}
    }
}

fn select_choice(state: &mut AppState, idx: usize) {
    if state.selected.is_some() {
        return;
    }
    let Some(question) = state.current_question() else {
        return;
    };
    let choices = question.choices();
    if idx < choices.len() {
        let answer = choices[idx].clone();
        state.choice_cursor = idx;
        state.select_answer(&answer);
    }
}

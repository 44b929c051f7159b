use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::model::{Question, TriviaResponse};

const API_URL: &str =
    "https://opentdb.com/api.php?amount=10&category=23&difficulty=easy&type=multiple";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Load the question batch. One fetch attempt, no retries; any failure or
/// an empty result set falls back to the bundled questions. Always returns
/// a non-empty list.
pub fn load_questions(offline: bool) -> Vec<Question> {
    if offline {
        return fallback_questions();
    }
    resolve(fetch_remote())
}

/// Run `load_questions` on a background thread so the TUI can draw a
/// loading screen while the fetch is in flight.
pub fn spawn_load(offline: bool) -> mpsc::Receiver<Vec<Question>> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let _ = tx.send(load_questions(offline));
    });

    rx
}

/// The fallback decision: a non-empty fetch result is used as-is, even if
/// shorter than requested. Errors and empty results are treated identically.
pub fn resolve(fetched: Result<Vec<Question>, String>) -> Vec<Question> {
    match fetched {
        Ok(questions) if !questions.is_empty() => {
            log::info!("loaded {} questions from remote", questions.len());
            questions
        }
        Ok(_) => {
            log::warn!("remote returned no questions, using bundled set");
            fallback_questions()
        }
        Err(e) => {
            log::warn!("question fetch failed ({}), using bundled set", e);
            fallback_questions()
        }
    }
}

fn fetch_remote() -> Result<Vec<Question>, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| format!("Cannot build HTTP client: {}", e))?;

    let response = client
        .get(API_URL)
        .send()
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("API returned status {}", response.status()));
    }

    let body = response
        .text()
        .map_err(|e| format!("Cannot read response body: {}", e))?;

    questions_from_payload(&body)
}

pub fn questions_from_payload(body: &str) -> Result<Vec<Question>, String> {
    let payload: TriviaResponse =
        serde_json::from_str(body).map_err(|e| format!("Invalid response payload: {}", e))?;

    Ok(payload.results.into_iter().map(Question::from).collect())
}

pub fn fallback_questions() -> Vec<Question> {
    let raw: [(&str, &[&str]); 6] = [
        ("Samoyedic", &["Hungarian", "Finnish", "Estonian"]),
        ("4", &["5", "2", "0"]),
        ("Spanish", &["English", "Portuguese", "Creole"]),
        ("Pacific", &["Atlantic", "Indian", "Arctic"]),
        ("Kaliningrad", &["Samara", "Nizhny Novgorod", "Omsk"]),
        ("Copenhagen", &["Aarhus", "Odense", "Aalborg"]),
    ];

    let prompts = [
        "All of the following are classified as Finno-Ugric languages EXCEPT:",
        "How many stars are featured on New Zealand's flag?",
        "What is the official language of Costa Rica?",
        "Which ocean borders the west coast of the United States?",
        "Which Russian oblast forms a border with Poland?",
        "What is the capital of Denmark?",
    ];

    prompts
        .iter()
        .zip(raw.iter())
        .map(|(prompt, (correct, incorrect))| Question {
            category: "Geography".to_string(),
            kind: "multiple".to_string(),
            difficulty: "easy".to_string(),
            prompt: prompt.to_string(),
            correct_answer: correct.to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

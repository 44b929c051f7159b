use termtrivia::model::Question;
use termtrivia::source::{fallback_questions, load_questions, questions_from_payload, resolve};

const SAMPLE_PAYLOAD: &str = r#"{
  "response_code": 0,
  "results": [
    {
      "category": "History",
      "type": "multiple",
      "difficulty": "easy",
      "question": "In which year did the Titanic sink?",
      "correct_answer": "1912",
      "incorrect_answers": ["1910", "1914", "1918"]
    },
    {
      "category": "History",
      "type": "multiple",
      "difficulty": "easy",
      "question": "Who was the first President of the United States?",
      "correct_answer": "George Washington",
      "incorrect_answers": ["Thomas Jefferson", "John Adams", "James Madison"]
    }
  ]
}"#;

#[test]
fn payload_decodes_into_questions() {
    let questions = questions_from_payload(SAMPLE_PAYLOAD).unwrap();

    assert_eq!(questions.len(), 2);
    let first = &questions[0];
    assert_eq!(first.category, "History");
    assert_eq!(first.kind, "multiple");
    assert_eq!(first.difficulty, "easy");
    assert_eq!(first.prompt, "In which year did the Titanic sink?");
    assert_eq!(first.correct_answer, "1912");
    assert_eq!(first.incorrect_answers, vec!["1910", "1914", "1918"]);
}

#[test]
fn garbage_payload_is_an_error() {
    assert!(questions_from_payload("not json").is_err());
}

#[test]
fn missing_results_reads_as_empty() {
    let questions = questions_from_payload(r#"{"response_code": 1}"#).unwrap();
    assert!(questions.is_empty());
}

#[test]
fn fetch_error_falls_back_to_bundled_set() {
    let questions = resolve(Err("connection refused".to_string()));
    assert_eq!(questions, fallback_questions());
}

#[test]
fn empty_results_fall_back_to_bundled_set() {
    let questions = resolve(Ok(Vec::new()));
    assert_eq!(questions, fallback_questions());
}

#[test]
fn partial_results_are_used_unpadded() {
    let fetched = questions_from_payload(SAMPLE_PAYLOAD).unwrap();
    let questions = resolve(Ok(fetched.clone()));
    assert_eq!(questions, fetched);
    assert_eq!(questions.len(), 2);
}

#[test]
fn fallback_is_exactly_six_questions_in_fixed_order() {
    let questions = fallback_questions();

    assert_eq!(questions.len(), 6);
    assert!(questions[0]
        .prompt
        .contains("Finno-Ugric languages EXCEPT"));
    assert_eq!(questions[0].correct_answer, "Samoyedic");
    assert_eq!(questions[5].prompt, "What is the capital of Denmark?");
    assert_eq!(questions[5].correct_answer, "Copenhagen");

    for q in &questions {
        assert!(!q.incorrect_answers.contains(&q.correct_answer));
        assert_eq!(q.difficulty, "easy");
    }
}

#[test]
fn offline_load_uses_bundled_set() {
    assert_eq!(load_questions(true), fallback_questions());
}

#[test]
fn choices_are_sorted_lexicographically() {
    let question = Question {
        category: "Geography".to_string(),
        kind: "multiple".to_string(),
        difficulty: "easy".to_string(),
        prompt: "Capital of Denmark?".to_string(),
        correct_answer: "Copenhagen".to_string(),
        incorrect_answers: vec![
            "Odense".to_string(),
            "Aarhus".to_string(),
            "Aalborg".to_string(),
        ],
    };

    let choices = question.choices();
    assert_eq!(choices, vec!["Aalborg", "Aarhus", "Copenhagen", "Odense"]);

    let mut sorted = choices.clone();
    sorted.sort();
    assert_eq!(choices, sorted);
}

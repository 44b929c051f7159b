use serde::Deserialize;

/// One quiz item: a prompt, the correct answer, and the distractors.
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub category: String,
    pub kind: String,
    pub difficulty: String,
    pub prompt: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    /// Combined answer set (correct + incorrect) in lexicographic order.
    /// The ordering is a presentation detail but must be stable so the
    /// choice list does not reshuffle between redraws.
    pub fn choices(&self) -> Vec<String> {
        let mut all: Vec<String> = self.incorrect_answers.clone();
        all.push(self.correct_answer.clone());
        all.sort();
        all
    }
}

/// Consumed shape of the question-bank response.
#[derive(Debug, Deserialize)]
pub struct TriviaResponse {
    #[serde(default)]
    pub results: Vec<ApiQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct ApiQuestion {
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub difficulty: String,
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

impl From<ApiQuestion> for Question {
    fn from(api: ApiQuestion) -> Self {
        Question {
            category: api.category,
            kind: api.kind,
            difficulty: api.difficulty,
            prompt: api.question,
            correct_answer: api.correct_answer,
            incorrect_answers: api.incorrect_answers,
        }
    }
}

use serde::{Deserialize, Serialize};

pub type WordId = i64;

/// A vocabulary item as delivered by the backend. Immutable once fetched;
/// `priority` is a scheduling weight where larger means "study sooner".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub meaning: String,
    #[serde(default)]
    pub priority: i32,
}

impl Word {
    pub fn new(id: WordId, text: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            meaning: meaning.into(),
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// One multiple-choice question: the prompted word plus shuffled options,
/// exactly one of which is `word.meaning`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub word: Word,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// Per-word outcome reported to the backend after a quiz.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordResult {
    pub word_id: WordId,
    pub is_correct: bool,
}

/// Acknowledgement returned by the reporting endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: Option<String>,
}

/// Which review pool to fetch: the "10 minutes after study" set or the
/// staged daily set tracked server-side.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReviewKind {
    PostLearning,
    StagedDaily,
}

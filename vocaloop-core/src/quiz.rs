use crate::{QuizQuestion, Word, WordId, WordResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

pub const MAX_DISTRACTORS: usize = 3;

/// No-repeat multiple-choice quiz over a word set. Words are asked
/// sequentially in insertion order, each exactly once; incorrect answers
/// are not re-queued.
pub struct QuizSession {
    words: Vec<Word>,
    next: usize,
    awaiting: Option<WordId>,
    correct_attempts: HashMap<WordId, u32>,
    rng: StdRng,
}

impl QuizSession {
    pub fn new(words: Vec<Word>) -> Self {
        Self::with_rng(words, StdRng::from_entropy())
    }

    /// Deterministic option sampling/shuffling, for tests.
    pub fn with_seed(words: Vec<Word>, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Self {
        let mut seen = HashSet::new();
        let words: Vec<Word> = words.into_iter().filter(|w| seen.insert(w.id)).collect();
        Self {
            words,
            next: 0,
            awaiting: None,
            correct_attempts: HashMap::new(),
            rng,
        }
    }

    /// Pop the next not-yet-asked word and build its question. Returns
    /// `None` once every word has been asked (immediately, for an empty
    /// session).
    pub fn generate_question(&mut self) -> Option<QuizQuestion> {
        let word = self.words.get(self.next)?.clone();
        self.next += 1;
        self.awaiting = Some(word.id);

        let mut others: Vec<&str> = self
            .words
            .iter()
            .filter(|w| w.id != word.id)
            .map(|w| w.meaning.as_str())
            .collect();
        others.sort_unstable();
        others.dedup();
        others.retain(|m| *m != word.meaning);

        let mut options: Vec<String> = others
            .choose_multiple(&mut self.rng, MAX_DISTRACTORS)
            .map(|m| m.to_string())
            .collect();
        options.push(word.meaning.clone());
        options.shuffle(&mut self.rng);
        let correct_index = options
            .iter()
            .position(|o| *o == word.meaning)
            .unwrap_or(0);

        Some(QuizQuestion {
            word,
            options,
            correct_index,
        })
    }

    /// Record the answer for the most recently generated question. A
    /// second call without a new question is a no-op.
    pub fn handle_answer(&mut self, is_correct: bool) {
        if let Some(id) = self.awaiting.take() {
            if is_correct {
                *self.correct_attempts.entry(id).or_insert(0) += 1;
            }
        }
    }

    pub fn completed_count(&self) -> usize {
        self.next
    }

    pub fn total_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.words.len()
    }

    pub fn correct_attempts(&self, id: WordId) -> u32 {
        self.correct_attempts.get(&id).copied().unwrap_or(0)
    }

    /// One result per original word; correct iff at least one correct
    /// answer was recorded for it.
    pub fn generate_results(&self) -> Vec<WordResult> {
        self.words
            .iter()
            .map(|w| WordResult {
                word_id: w.id,
                is_correct: self.correct_attempts(w.id) >= 1,
            })
            .collect()
    }
}

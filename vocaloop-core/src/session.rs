use crate::{Word, WordId};

/// Sequential cursor over a day's study selection. The cursor only moves
/// forward (or back to zero via `reset`); an empty selection is finished
/// from the start.
#[derive(Clone, Debug)]
pub struct StudySession {
    words: Vec<Word>,
    index: usize,
}

impl StudySession {
    pub fn new(selection: Vec<Word>) -> Self {
        Self {
            words: selection,
            index: 0,
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn current(&self) -> Option<&Word> {
        self.words.get(self.index)
    }

    /// Move to the next word. Returns true while another word remains;
    /// the first false transitions the session to finished, and further
    /// calls stay finished.
    pub fn advance(&mut self) -> bool {
        if self.index + 1 < self.words.len() {
            self.index += 1;
            true
        } else {
            self.index = self.words.len();
            false
        }
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.words.len()
    }

    /// Restart from the first word without touching the selection.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// (words studied so far, selection size) for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.index.min(self.words.len()), self.words.len())
    }

    /// Ids of every word in the selection, for the completion report.
    pub fn completed_ids(&self) -> Vec<WordId> {
        self.words.iter().map(|w| w.id).collect()
    }
}

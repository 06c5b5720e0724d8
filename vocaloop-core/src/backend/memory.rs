use crate::{CoreError, ReviewKind, SubmitOutcome, Word, WordId, WordResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

/// A submission captured by [`MemoryBackend`], kept verbatim so tests can
/// assert on what would have gone over the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedSubmission {
    pub kind: ReviewKind,
    pub session_id: Option<Uuid>,
    pub results: Vec<WordResult>,
    pub received_at: DateTime<Utc>,
}

/// In-process backend: seedable word pools plus a log of everything
/// submitted. Doubles as the offline store when the app runs from a local
/// word file.
#[derive(Default)]
pub struct MemoryBackend {
    today: RwLock<Vec<Word>>,
    post_learning: RwLock<Vec<Word>>,
    staged_daily: RwLock<Vec<Word>>,
    submissions: RwLock<Vec<RecordedSubmission>>,
    completions: RwLock<Vec<Vec<WordId>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_today(&self, words: Vec<Word>) {
        *self.today.write() = words;
    }

    pub fn seed_review(&self, kind: ReviewKind, words: Vec<Word>) {
        match kind {
            ReviewKind::PostLearning => *self.post_learning.write() = words,
            ReviewKind::StagedDaily => *self.staged_daily.write() = words,
        }
    }

    pub fn submissions(&self) -> Vec<RecordedSubmission> {
        self.submissions.read().clone()
    }

    pub fn completions(&self) -> Vec<Vec<WordId>> {
        self.completions.read().clone()
    }
}

fn check_token(token: &str) -> Result<(), CoreError> {
    if token.trim().is_empty() {
        return Err(CoreError::Invalid("auth token must not be blank"));
    }
    Ok(())
}

#[async_trait]
impl crate::backend::StudyBackend for MemoryBackend {
    async fn fetch_today_words(&self, token: &str) -> Result<Vec<Word>, CoreError> {
        check_token(token)?;
        Ok(self.today.read().clone())
    }

    async fn fetch_review_words(
        &self,
        token: &str,
        kind: ReviewKind,
    ) -> Result<Vec<Word>, CoreError> {
        check_token(token)?;
        let pool = match kind {
            ReviewKind::PostLearning => &self.post_learning,
            ReviewKind::StagedDaily => &self.staged_daily,
        };
        Ok(pool.read().clone())
    }

    async fn submit_review_results(
        &self,
        token: &str,
        kind: ReviewKind,
        session_id: Option<Uuid>,
        results: &[WordResult],
    ) -> Result<SubmitOutcome, CoreError> {
        check_token(token)?;
        self.submissions.write().push(RecordedSubmission {
            kind,
            session_id,
            results: results.to_vec(),
            received_at: Utc::now(),
        });
        Ok(SubmitOutcome {
            success: true,
            message: None,
        })
    }

    async fn submit_study_completion(
        &self,
        token: &str,
        completed_word_ids: &[WordId],
    ) -> Result<SubmitOutcome, CoreError> {
        check_token(token)?;
        self.completions.write().push(completed_word_ids.to_vec());
        Ok(SubmitOutcome {
            success: true,
            message: None,
        })
    }
}

use crate::{CoreError, ReviewKind, SubmitOutcome, Word, WordId, WordResult};
use async_trait::async_trait;
use uuid::Uuid;

pub mod memory;

pub use memory::{MemoryBackend, RecordedSubmission};

/// Boundary to the remote word/review service. Implementations are the
/// HTTP client and the in-memory backend used for tests and offline study.
#[async_trait]
pub trait StudyBackend: Send + Sync {
    /// Today's study catalog for the authenticated user.
    async fn fetch_today_words(&self, token: &str) -> Result<Vec<Word>, CoreError>;

    /// The review pool of the given kind.
    async fn fetch_review_words(&self, token: &str, kind: ReviewKind)
        -> Result<Vec<Word>, CoreError>;

    /// Per-word quiz results for a finished review session.
    async fn submit_review_results(
        &self,
        token: &str,
        kind: ReviewKind,
        session_id: Option<Uuid>,
        results: &[WordResult],
    ) -> Result<SubmitOutcome, CoreError>;

    /// Marks today's study pass as done for the listed words.
    async fn submit_study_completion(
        &self,
        token: &str,
        completed_word_ids: &[WordId],
    ) -> Result<SubmitOutcome, CoreError>;
}

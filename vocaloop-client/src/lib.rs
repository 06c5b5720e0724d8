use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;
use vocaloop_core::{
    CoreError, ReviewKind, StudyBackend, SubmitOutcome, Word, WordId, WordResult,
};

pub mod dto;

use dto::{BaseSuccessResponse, ReviewResultRequest, StudyCompleteRequest, WordListResponse};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

const TODAY_WORDS_PATH: &str = "/api/learn/today-words";
const POST_LEARNING_WORDS_PATH: &str = "/api/review/post-learning-words";
const STAGED_WORDS_PATH: &str = "/api/review/staged/today-words";
const POST_LEARNING_RESULTS_PATH: &str = "/api/review/post-learning/results";
const STAGED_RESULTS_PATH: &str = "/api/review/staged/results";
const STUDY_COMPLETE_PATH: &str = "/api/learn/complete";

/// Remote word/review service client. One instance per base URL; cheap to
/// clone (shares the underlying connection pool).
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_words(&self, token: &str, path: &str) -> Result<Vec<Word>, CoreError> {
        let url = self.url(path);
        debug!(%url, "fetching word list");
        let resp = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(net_err)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Backend(format!("HTTP {status} from {path}")));
        }
        let body: WordListResponse = resp.json().await.map_err(net_err)?;
        if let Some(error) = body.error {
            return Err(CoreError::Backend(error));
        }
        let words: Vec<Word> = body
            .words
            .unwrap_or_default()
            .into_iter()
            .map(Word::from)
            .collect();
        debug!(count = words.len(), path, "word list received");
        Ok(words)
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<SubmitOutcome, CoreError> {
        let url = self.url(path);
        debug!(%url, "submitting");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(net_err)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Backend(format!("HTTP {status} from {path}")));
        }
        let body: BaseSuccessResponse = resp.json().await.map_err(net_err)?;
        Ok(SubmitOutcome::from(body))
    }
}

fn net_err(e: reqwest::Error) -> CoreError {
    CoreError::Network(e.to_string())
}

#[async_trait]
impl StudyBackend for HttpBackend {
    async fn fetch_today_words(&self, token: &str) -> Result<Vec<Word>, CoreError> {
        self.get_words(token, TODAY_WORDS_PATH).await
    }

    async fn fetch_review_words(
        &self,
        token: &str,
        kind: ReviewKind,
    ) -> Result<Vec<Word>, CoreError> {
        let path = match kind {
            ReviewKind::PostLearning => POST_LEARNING_WORDS_PATH,
            ReviewKind::StagedDaily => STAGED_WORDS_PATH,
        };
        self.get_words(token, path).await
    }

    async fn submit_review_results(
        &self,
        token: &str,
        kind: ReviewKind,
        session_id: Option<Uuid>,
        results: &[WordResult],
    ) -> Result<SubmitOutcome, CoreError> {
        let path = match kind {
            ReviewKind::PostLearning => POST_LEARNING_RESULTS_PATH,
            ReviewKind::StagedDaily => STAGED_RESULTS_PATH,
        };
        let request = ReviewResultRequest {
            session_id: session_id.map(|id| id.to_string()),
            results,
        };
        self.post_json(token, path, &request).await
    }

    async fn submit_study_completion(
        &self,
        token: &str,
        completed_word_ids: &[WordId],
    ) -> Result<SubmitOutcome, CoreError> {
        let request = StudyCompleteRequest { completed_word_ids };
        self.post_json(token, STUDY_COMPLETE_PATH, &request).await
    }
}

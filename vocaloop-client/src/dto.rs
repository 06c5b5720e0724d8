use serde::{Deserialize, Serialize};
use vocaloop_core::{SubmitOutcome, Word, WordId, WordResult};

/// Wire shape of a vocabulary word. The backend calls the term field
/// `word`; the core model calls it `text`.
#[derive(Debug, Deserialize)]
pub struct WordDto {
    pub id: WordId,
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub priority: i32,
}

impl From<WordDto> for Word {
    fn from(dto: WordDto) -> Self {
        Word::new(dto.id, dto.word, dto.meaning).with_priority(dto.priority)
    }
}

/// Word-list endpoints answer `{ words?, error?, message? }`.
#[derive(Debug, Default, Deserialize)]
pub struct WordListResponse {
    pub words: Option<Vec<WordDto>>,
    pub error: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResultRequest<'a> {
    pub session_id: Option<String>,
    pub results: &'a [WordResult],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyCompleteRequest<'a> {
    pub completed_word_ids: &'a [WordId],
}

#[derive(Debug, Default, Deserialize)]
pub struct BaseSuccessResponse {
    pub success: Option<bool>,
    pub message: Option<String>,
}

impl From<BaseSuccessResponse> for SubmitOutcome {
    fn from(resp: BaseSuccessResponse) -> Self {
        SubmitOutcome {
            success: resp.success.unwrap_or(false),
            message: resp.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_with_words() {
        let json = r#"{"words":[{"id":3,"word":"house","meaning":"a dwelling","priority":5},
                                {"id":1,"word":"apple","meaning":"a fruit"}]}"#;
        let resp: WordListResponse = serde_json::from_str(json).unwrap();
        let words: Vec<Word> = resp.words.unwrap().into_iter().map(Word::from).collect();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "house");
        assert_eq!(words[0].priority, 5);
        assert_eq!(words[1].priority, 0);
    }

    #[test]
    fn word_list_error_only() {
        let resp: WordListResponse =
            serde_json::from_str(r#"{"error":"no session"}"#).unwrap();
        assert!(resp.words.is_none());
        assert_eq!(resp.error.as_deref(), Some("no session"));
    }

    #[test]
    fn review_request_uses_wire_field_names() {
        let results = vec![WordResult { word_id: 4, is_correct: false }];
        let req = ReviewResultRequest {
            session_id: Some("abc".into()),
            results: &results,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["sessionId"], "abc");
        assert_eq!(json["results"][0]["wordId"], 4);
        assert_eq!(json["results"][0]["isCorrect"], false);
    }

    #[test]
    fn study_complete_request_field_name() {
        let ids = vec![1, 2, 3];
        let req = StudyCompleteRequest { completed_word_ids: &ids };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["completedWordIds"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn missing_success_field_means_failure() {
        let resp: BaseSuccessResponse = serde_json::from_str("{}").unwrap();
        let outcome = SubmitOutcome::from(resp);
        assert!(!outcome.success);
    }
}

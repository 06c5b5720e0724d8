use std::collections::HashSet;
use vocaloop_core::{QuizSession, Word};

fn pool(n: i64) -> Vec<Word> {
    (1..=n)
        .map(|i| Word::new(i, format!("w{i}"), format!("m{i}")))
        .collect()
}

#[test]
fn asks_every_word_exactly_once() {
    let n = 6;
    let mut quiz = QuizSession::with_seed(pool(n), 1);
    let mut asked = Vec::new();
    while let Some(q) = quiz.generate_question() {
        asked.push(q.word.id);
        quiz.handle_answer(true);
    }
    assert_eq!(asked.len(), quiz.total_count());
    let distinct: HashSet<_> = asked.iter().collect();
    assert_eq!(distinct.len(), asked.len(), "no id repeated");
    assert!(quiz.is_finished());
}

#[test]
fn pops_in_insertion_order() {
    let mut quiz = QuizSession::with_seed(pool(4), 3);
    for expected in 1..=4 {
        let q = quiz.generate_question().unwrap();
        assert_eq!(q.word.id, expected);
        quiz.handle_answer(false);
    }
    assert!(quiz.generate_question().is_none());
}

#[test]
fn options_hold_the_correct_meaning_once() {
    let mut quiz = QuizSession::with_seed(pool(10), 5);
    while let Some(q) = quiz.generate_question() {
        assert_eq!(q.options.len(), 4);
        assert_eq!(q.options[q.correct_index], q.word.meaning);
        assert_eq!(
            q.options.iter().filter(|o| **o == q.word.meaning).count(),
            1
        );
        let distinct: HashSet<_> = q.options.iter().collect();
        assert_eq!(distinct.len(), q.options.len(), "duplicate option string");
        quiz.handle_answer(true);
    }
}

#[test]
fn fewer_distractors_than_three_shrinks_options() {
    let mut quiz = QuizSession::with_seed(pool(3), 2);
    let q = quiz.generate_question().unwrap();
    // only two other meanings exist
    assert_eq!(q.options.len(), 3);
    assert_eq!(q.options[q.correct_index], q.word.meaning);
}

#[test]
fn single_word_quiz_has_no_distractors() {
    let mut quiz = QuizSession::with_seed(pool(1), 9);
    let q = quiz.generate_question().unwrap();
    assert_eq!(q.options.len(), 1);
    assert_eq!(q.correct_index, 0);
    quiz.handle_answer(true);
    assert!(quiz.generate_question().is_none());
}

#[test]
fn shared_meanings_never_duplicate_options() {
    let words = vec![
        Word::new(1, "big", "large"),
        Word::new(2, "huge", "large"),
        Word::new(3, "tiny", "small"),
        Word::new(4, "rapid", "fast"),
    ];
    let mut quiz = QuizSession::with_seed(words, 4);
    while let Some(q) = quiz.generate_question() {
        let distinct: HashSet<_> = q.options.iter().collect();
        assert_eq!(distinct.len(), q.options.len());
        assert_eq!(
            q.options.iter().filter(|o| **o == q.word.meaning).count(),
            1
        );
        quiz.handle_answer(false);
    }
}

#[test]
fn empty_quiz_is_immediately_complete() {
    let mut quiz = QuizSession::with_seed(Vec::new(), 0);
    assert_eq!(quiz.total_count(), 0);
    assert!(quiz.is_finished());
    assert!(quiz.generate_question().is_none());
    assert!(quiz.generate_results().is_empty());
}

#[test]
fn duplicate_ids_collapse_at_construction() {
    let words = vec![
        Word::new(1, "w1", "m1"),
        Word::new(1, "w1-dup", "m1-dup"),
        Word::new(2, "w2", "m2"),
    ];
    let mut quiz = QuizSession::with_seed(words, 11);
    assert_eq!(quiz.total_count(), 2);
    let mut asked = 0;
    while quiz.generate_question().is_some() {
        asked += 1;
        quiz.handle_answer(true);
    }
    assert_eq!(asked, 2);
}

#[test]
fn progress_counts_popped_words() {
    let mut quiz = QuizSession::with_seed(pool(3), 6);
    assert_eq!((quiz.completed_count(), quiz.total_count()), (0, 3));
    quiz.generate_question();
    quiz.handle_answer(true);
    assert_eq!((quiz.completed_count(), quiz.total_count()), (1, 3));
    quiz.generate_question();
    quiz.handle_answer(false);
    quiz.generate_question();
    quiz.handle_answer(true);
    assert_eq!((quiz.completed_count(), quiz.total_count()), (3, 3));
}

#[test]
fn results_reflect_answers() {
    let mut quiz = QuizSession::with_seed(pool(3), 21);
    let answers = [true, false, true];
    let mut i = 0;
    while let Some(_q) = quiz.generate_question() {
        quiz.handle_answer(answers[i]);
        i += 1;
    }

    let results = quiz.generate_results();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_correct);
    assert!(!results[1].is_correct);
    assert!(results[2].is_correct);

    assert_eq!(quiz.correct_attempts(1), 1);
    assert_eq!(quiz.correct_attempts(2), 0);
}

#[test]
fn handle_answer_without_pending_question_is_a_noop() {
    let mut quiz = QuizSession::with_seed(pool(2), 30);
    quiz.generate_question();
    quiz.handle_answer(true);
    // second answer for the same question changes nothing
    quiz.handle_answer(true);
    assert_eq!(quiz.correct_attempts(1), 1);
}

#[test]
fn incorrect_answers_are_not_requeued() {
    let mut quiz = QuizSession::with_seed(pool(2), 17);
    let first = quiz.generate_question().unwrap();
    quiz.handle_answer(false);
    let second = quiz.generate_question().unwrap();
    assert_ne!(first.word.id, second.word.id);
    quiz.handle_answer(false);
    assert!(quiz.generate_question().is_none());
}

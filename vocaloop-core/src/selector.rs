use crate::{CoreError, Word};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Pick today's study words: priority descending, id ascending on ties,
/// first `daily_goal` taken. An empty catalog yields an empty selection.
pub fn select_by_priority(all_words: &[Word], daily_goal: usize) -> Result<Vec<Word>, CoreError> {
    if daily_goal == 0 {
        return Err(CoreError::Invalid("daily goal must be positive"));
    }
    let mut pool = dedup_by_id(all_words);
    pool.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.id.cmp(&b.id)));
    pool.truncate(daily_goal);
    Ok(pool)
}

/// Alternate policy: fill the quota FIFO from words above the priority
/// threshold (oldest id first), then pad with a uniform random sample
/// (without replacement) from the rest. Pass a seeded rng for determinism.
pub fn select_with_backfill<R: Rng>(
    all_words: &[Word],
    daily_goal: usize,
    priority_threshold: i32,
    rng: &mut R,
) -> Result<Vec<Word>, CoreError> {
    if daily_goal == 0 {
        return Err(CoreError::Invalid("daily goal must be positive"));
    }
    let (mut high, low): (Vec<Word>, Vec<Word>) = dedup_by_id(all_words)
        .into_iter()
        .partition(|w| w.priority > priority_threshold);

    high.sort_by_key(|w| w.id);
    high.truncate(daily_goal);

    let mut picked = high;
    if picked.len() < daily_goal {
        let need = daily_goal - picked.len();
        let mut padding: Vec<Word> = low.choose_multiple(rng, need).cloned().collect();
        picked.append(&mut padding);
    }
    Ok(picked)
}

fn dedup_by_id(words: &[Word]) -> Vec<Word> {
    let mut seen = HashSet::new();
    words
        .iter()
        .filter(|w| seen.insert(w.id))
        .cloned()
        .collect()
}

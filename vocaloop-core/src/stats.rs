use crate::WordResult;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSummary {
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
}

impl ResultSummary {
    pub fn record(&mut self, r: &WordResult) {
        self.total += 1;
        if r.is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    pub fn accuracy(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f32 / self.total as f32
        }
    }
}

pub fn summarize(results: &[WordResult]) -> ResultSummary {
    let mut summary = ResultSummary::default();
    for r in results {
        summary.record(r);
    }
    summary
}

use std::collections::HashMap;

use crate::{
    foundation::error::{RubricError, RubricResult},
    model::task::ReportRequest,
};

/// Correctness bucket assigned to one participant's answer for one criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Bucket {
    /// Answer matches the correct value.
    Correct,
    /// Answer differs from the correct value.
    Wrong,
    /// Answer cannot be graded (blank answer or no usable correct value).
    Unknown,
    /// No submission received for the criterion.
    Pending,
}

impl Bucket {
    /// Fixed display order shared by the correctness chart and summaries.
    pub const ORDER: [Bucket; 4] = [
        Bucket::Correct,
        Bucket::Wrong,
        Bucket::Unknown,
        Bucket::Pending,
    ];

    /// Display label for the bucket.
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Correct => "Correct",
            Bucket::Wrong => "Wrong",
            Bucket::Unknown => "Unknown",
            Bucket::Pending => "Pending",
        }
    }
}

/// Option value frequency table preserving first-seen insertion order.
///
/// A sequence of `(value, count)` pairs plus an index for O(1) bumps. The
/// iteration order is the order in which distinct values were first observed
/// while scanning submissions in caller-supplied order; it is never sorted or
/// regrouped.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct OptionCounts {
    entries: Vec<(String, u64)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl OptionCounts {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `value`, inserting it on first sight.
    pub fn bump(&mut self, value: &str) {
        if let Some(&i) = self.index.get(value) {
            self.entries[i].1 += 1;
        } else {
            self.index.insert(value.to_string(), self.entries.len());
            self.entries.push((value.to_string(), 1));
        }
    }

    /// Count recorded for `value` (0 when never seen).
    pub fn count(&self, value: &str) -> u64 {
        self.index.get(value).map_or(0, |&i| self.entries[i].1)
    }

    /// Iterate `(value, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(v, n)| (v.as_str(), *n))
    }

    /// Number of distinct values observed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no values were observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Aggregated outcome statistics for one criterion.
///
/// Built fresh per report request and discarded after the document is
/// produced; never persisted.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CriterionStats {
    /// Criterion identifier.
    pub criterion_id: String,
    /// Display label (metadata description, falling back to the id).
    pub label: String,
    /// Participants whose answer matched the correct value.
    pub correct: u32,
    /// Participants whose answer differed from the correct value.
    pub wrong: u32,
    /// Participants whose answer could not be graded.
    pub unknown: u32,
    /// Participants with no submission for the criterion.
    pub pending: u32,
    /// Observed answer values in first-seen order.
    pub options: OptionCounts,
}

impl CriterionStats {
    /// Count for a single bucket. Total over [`Bucket`].
    pub fn bucket_count(&self, bucket: Bucket) -> u32 {
        match bucket {
            Bucket::Correct => self.correct,
            Bucket::Wrong => self.wrong,
            Bucket::Unknown => self.unknown,
            Bucket::Pending => self.pending,
        }
    }

    /// Number of graded submissions: `correct + wrong + unknown`.
    pub fn analyzed(&self) -> u32 {
        self.correct + self.wrong + self.unknown
    }
}

/// Aggregate all submissions of `request` into per-criterion statistics.
///
/// Output order equals sorted-criteria order. A submission referencing a
/// criterion missing from the criteria list is a data-integrity fault and
/// aborts the pass; the caller never sees a partially aggregated result.
#[tracing::instrument(skip(request))]
pub fn aggregate(request: &ReportRequest) -> RubricResult<Vec<CriterionStats>> {
    let criteria = request.sorted_criteria();

    let index: HashMap<&str, usize> = criteria
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id.as_str(), i))
        .collect();

    let mut stats: Vec<CriterionStats> = criteria
        .iter()
        .map(|c| CriterionStats {
            criterion_id: c.id.clone(),
            label: request
                .meta_for(&c.id)
                .map(|m| m.description.trim())
                .filter(|d| !d.is_empty())
                .unwrap_or(c.id.as_str())
                .to_string(),
            correct: 0,
            wrong: 0,
            unknown: 0,
            pending: 0,
            options: OptionCounts::new(),
        })
        .collect();
    let mut received = vec![0u32; stats.len()];

    for submission in &request.submissions {
        let Some(&i) = index.get(submission.criterion_id.as_str()) else {
            return Err(RubricError::aggregation(format!(
                "submission from '{}' references unknown criterion '{}'",
                submission.participant_id, submission.criterion_id
            )));
        };
        received[i] += 1;
        if received[i] > request.participants {
            return Err(RubricError::aggregation(format!(
                "criterion '{}' received more submissions than the {} expected participants",
                submission.criterion_id, request.participants
            )));
        }

        let answer = submission.answer.trim();
        match classify(answer, request.answer_key.value_for(&submission.criterion_id)) {
            Bucket::Correct => stats[i].correct += 1,
            Bucket::Wrong => stats[i].wrong += 1,
            Bucket::Unknown => stats[i].unknown += 1,
            Bucket::Pending => {}
        }
        if !answer.is_empty() {
            stats[i].options.bump(answer);
        }
    }

    for (i, stat) in stats.iter_mut().enumerate() {
        stat.pending = request.participants - received[i];
    }

    tracing::debug!(
        criteria = stats.len(),
        submissions = request.submissions.len(),
        "aggregated submission outcomes"
    );
    Ok(stats)
}

/// Classify one received answer. Pending never applies to a received record.
fn classify(answer: &str, correct: Option<&str>) -> Bucket {
    match correct {
        None => Bucket::Unknown,
        Some(_) if answer.is_empty() => Bucket::Unknown,
        Some(correct) if answer == correct => Bucket::Correct,
        Some(_) => Bucket::Wrong,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stats/aggregate.rs"]
mod tests;

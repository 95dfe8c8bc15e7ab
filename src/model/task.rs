use std::collections::BTreeMap;

use crate::foundation::error::{RubricError, RubricResult};

/// The evaluation task a report is generated for.
///
/// A request is a pure data model assembled by external collaborators (study
/// lifecycle, persistence, HTTP layer) and can be serialized/deserialized via
/// Serde (JSON). The engine never mutates it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Task {
    /// Task identifier shown in section headers.
    pub id: String,
    /// Task question text shown in every criterion section.
    pub question: String,
}

/// One evaluation criterion of a task.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Criterion {
    /// Criterion identifier (stable within a task).
    pub id: String,
    /// Researcher-defined display ordering within the task.
    pub priority: u32,
}

/// Display metadata for a criterion, held separately from the criteria list.
///
/// Metadata may be missing for a criterion id; the report then renders with a
/// synthesized `UNKNOWN` type and a placeholder description instead of
/// aborting.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CriterionMeta {
    /// Identifier of the criterion this metadata describes.
    pub criterion_id: String,
    /// Criterion type tag (for example `BOOLEAN` or `SCALE`).
    pub kind: String,
    /// Human-readable criterion description.
    pub description: String,
}

/// One participant's submitted answer for one criterion.
///
/// Absence of a record for a (participant, criterion) pair means the
/// participant is pending for that criterion.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Submission {
    /// Submitting participant identifier.
    pub participant_id: String,
    /// Criterion the answer belongs to.
    pub criterion_id: String,
    /// Raw answer value; blank values aggregate as unknown.
    pub answer: String,
}

/// Correct-answer mapping keyed by criterion identifier.
///
/// The mapping is explicit by id. Callers still holding the legacy
/// index-aligned answer list can convert it through
/// [`AnswerKey::from_positional`], which fails loudly on misalignment instead
/// of silently attaching answers to the wrong criterion.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct AnswerKey {
    values: BTreeMap<String, String>,
}

impl AnswerKey {
    /// Build a key from explicit `(criterion id, correct value)` pairs.
    ///
    /// Duplicate criterion ids are a validation error.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> RubricResult<Self> {
        let mut values = BTreeMap::new();
        for (id, value) in pairs {
            if id.trim().is_empty() {
                return Err(RubricError::validation(
                    "answer key criterion id must be non-empty",
                ));
            }
            if values.insert(id.clone(), value).is_some() {
                return Err(RubricError::validation(format!(
                    "answer key has duplicate entry for criterion '{id}'"
                )));
            }
        }
        Ok(Self { values })
    }

    /// Build a key from an index-aligned value list.
    ///
    /// `values[i]` is paired with the i-th criterion of `criteria` sorted by
    /// display priority, matching how legacy callers stored answers. Length
    /// divergence between the two sequences is a validation error.
    pub fn from_positional(criteria: &[Criterion], values: Vec<String>) -> RubricResult<Self> {
        if criteria.len() != values.len() {
            return Err(RubricError::validation(format!(
                "positional answer list has {} entries for {} criteria",
                values.len(),
                criteria.len()
            )));
        }
        let mut sorted: Vec<&Criterion> = criteria.iter().collect();
        sorted.sort_by(|a, b| (a.priority, a.id.as_str()).cmp(&(b.priority, b.id.as_str())));
        Self::from_pairs(
            sorted
                .into_iter()
                .map(|c| c.id.clone())
                .zip(values)
                .collect::<Vec<_>>(),
        )
    }

    /// Correct value for `criterion_id`, if present and non-blank.
    ///
    /// Blank stored values are treated as absent, so callers see a single
    /// "no usable correct answer" signal.
    pub fn value_for(&self, criterion_id: &str) -> Option<&str> {
        self.values
            .get(criterion_id)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Number of stored entries, blank values included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A complete report request: one task plus its resolved evaluation inputs.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ReportRequest {
    /// Task under analysis.
    pub task: Task,
    /// Criteria evaluated for the task. The engine sorts these by priority.
    pub criteria: Vec<Criterion>,
    /// Display metadata, possibly incomplete.
    #[serde(default)]
    pub metadata: Vec<CriterionMeta>,
    /// Correct-answer mapping.
    #[serde(default)]
    pub answer_key: AnswerKey,
    /// Submission records across all participants and criteria.
    pub submissions: Vec<Submission>,
    /// Total expected participant count, used for pending calculation.
    pub participants: u32,
}

impl ReportRequest {
    /// Validate request invariants before any engine stage runs.
    pub fn validate(&self) -> RubricResult<()> {
        if self.task.id.trim().is_empty() {
            return Err(RubricError::validation("task id must be non-empty"));
        }
        if self.criteria.is_empty() {
            return Err(RubricError::validation(
                "report request must name at least one criterion",
            ));
        }
        if self.participants == 0 {
            return Err(RubricError::validation("participants must be > 0"));
        }

        let mut seen = std::collections::HashSet::new();
        for criterion in &self.criteria {
            if criterion.id.trim().is_empty() {
                return Err(RubricError::validation("criterion id must be non-empty"));
            }
            if !seen.insert(criterion.id.as_str()) {
                return Err(RubricError::validation(format!(
                    "duplicate criterion id '{}'",
                    criterion.id
                )));
            }
        }

        for submission in &self.submissions {
            if submission.participant_id.trim().is_empty() {
                return Err(RubricError::validation(
                    "submission participant_id must be non-empty",
                ));
            }
            if submission.criterion_id.trim().is_empty() {
                return Err(RubricError::validation(
                    "submission criterion_id must be non-empty",
                ));
            }
        }

        Ok(())
    }

    /// Criteria in display order: ascending priority, ties broken by id.
    pub fn sorted_criteria(&self) -> Vec<&Criterion> {
        let mut sorted: Vec<&Criterion> = self.criteria.iter().collect();
        sorted.sort_by(|a, b| (a.priority, a.id.as_str()).cmp(&(b.priority, b.id.as_str())));
        sorted
    }

    /// Display metadata for `criterion_id`, if any was supplied.
    pub fn meta_for(&self, criterion_id: &str) -> Option<&CriterionMeta> {
        self.metadata
            .iter()
            .find(|m| m.criterion_id == criterion_id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/task.rs"]
mod tests;

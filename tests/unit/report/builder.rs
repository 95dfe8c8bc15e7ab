use super::*;
use lopdf::Document;

use crate::model::task::{AnswerKey, Criterion, CriterionMeta, Submission, Task};

fn demo_request() -> ReportRequest {
    ReportRequest {
        task: Task {
            id: "t1".to_string(),
            question: "Does the summary faithfully cover the source text?".to_string(),
        },
        criteria: vec![
            Criterion {
                id: "coverage".to_string(),
                priority: 1,
            },
            Criterion {
                id: "fluency".to_string(),
                priority: 2,
            },
        ],
        // no metadata for "fluency": its section renders with placeholders
        metadata: vec![CriterionMeta {
            criterion_id: "coverage".to_string(),
            kind: "BOOLEAN".to_string(),
            description: "All key statements of the source appear in the summary".to_string(),
        }],
        answer_key: AnswerKey::from_pairs(vec![("coverage".to_string(), "yes".to_string())])
            .unwrap(),
        submissions: vec![
            Submission {
                participant_id: "p1".to_string(),
                criterion_id: "coverage".to_string(),
                answer: "yes".to_string(),
            },
            Submission {
                participant_id: "p2".to_string(),
                criterion_id: "coverage".to_string(),
                answer: "no".to_string(),
            },
            Submission {
                participant_id: "p1".to_string(),
                criterion_id: "fluency".to_string(),
                answer: "4".to_string(),
            },
        ],
        participants: 3,
    }
}

fn extract_all_text(bytes: &[u8]) -> String {
    let doc = Document::load_mem(bytes).unwrap();
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&pages).unwrap()
}

#[test]
fn report_is_a_pdf_document() {
    let report = build_report(&demo_request()).unwrap();
    assert!(report.bytes.starts_with(b"%PDF-"));
    assert!(!report.is_empty());
    assert_eq!(ReportDocument::CONTENT_TYPE, "application/pdf");
}

#[test]
fn every_criterion_gets_a_section() {
    let report = build_report(&demo_request()).unwrap();
    let text = extract_all_text(&report.bytes);
    assert!(text.contains("Task t1"));
    assert!(text.contains("Criterion 1 of 2"));
    assert!(text.contains("Criterion 2 of 2"));
    assert!(text.contains("All key statements of the source"));
}

#[test]
fn missing_metadata_renders_placeholders_without_aborting() {
    let report = build_report(&demo_request()).unwrap();
    let text = extract_all_text(&report.bytes);
    // "fluency" has no metadata and no answer key entry
    assert!(text.contains("UNKNOWN"));
    assert!(text.contains("BOOLEAN"));
}

#[test]
fn summary_counts_appear_in_fixed_order() {
    let report = build_report(&demo_request()).unwrap();
    let text = extract_all_text(&report.bytes);
    for label in ["Correct:", "Wrong:", "Unknown:", "Pending:", "Analyzed:"] {
        assert!(text.contains(label), "missing summary label {label}");
    }
    let correct = text.find("Correct:").unwrap();
    let pending = text.find("Pending:").unwrap();
    assert!(correct < pending);
}

#[test]
fn identical_requests_build_identical_documents() {
    let request = demo_request();
    let a = build_report(&request).unwrap();
    let b = build_report(&request).unwrap();
    assert_eq!(a.bytes, b.bytes);
}

#[test]
fn invalid_requests_fail_validation() {
    let mut request = demo_request();
    request.participants = 0;
    assert!(matches!(
        build_report(&request),
        Err(crate::foundation::error::RubricError::Validation(_))
    ));
}

#[test]
fn device_scale_changes_raster_density_only() {
    let request = demo_request();
    let dense = build_report_with(&request, &ReportOptions { device_scale: 1 }).unwrap();
    let doc = Document::load_mem(&dense.bytes).unwrap();
    assert!(!doc.get_pages().is_empty());
}

#[test]
fn summary_lines_are_six_fixed_entries() {
    let stats = aggregate(&demo_request()).unwrap();
    let lines = summary_lines(&stats[0], "yes");
    assert_eq!(lines.len(), 6);
    assert!(lines[0].contains("Correct: 1"));
    assert!(lines[1].contains("Wrong: 1"));
    assert!(lines[2].contains("Unknown: 0"));
    assert!(lines[3].contains("Pending: 1"));
    assert!(lines[4].contains("Analyzed: 2"));
    assert!(lines[5].contains("Correct answer: yes"));
}

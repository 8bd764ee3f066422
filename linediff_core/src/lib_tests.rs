use super::*;

fn options() -> DiffOptions {
    DiffOptions::default()
}

#[test]
fn text_diff_report_counts_changes() {
    let report =
        text_diff_internal("line 1\nline 2\nline 3", "line 1\nline 2\nline 4", &options())
            .expect("diff ok");

    assert_eq!(report.entries.len(), 4);
    assert_eq!(report.stats.added, 1);
    assert_eq!(report.stats.removed, 1);
    assert_eq!(report.stats.unchanged, 2);
    assert_eq!(report.stats.total, 4);
}

#[test]
fn text_diff_report_serializes_entries_and_stats() {
    let report = text_diff_internal("a", "b", &options()).expect("diff ok");
    let value = serde_json::to_value(&report).expect("serialize");

    assert_eq!(
        value,
        serde_json::json!({
            "entries": [
                { "kind": "removed", "content": "a", "leftLine": 1 },
                { "kind": "added", "content": "b", "rightLine": 1 },
            ],
            "stats": { "added": 1, "removed": 1, "unchanged": 0, "total": 2 },
        })
    );
}

#[test]
fn text_diff_applies_normalization_flags() {
    let opts = DiffOptions {
        ignore_whitespace: true,
        ignore_case: true,
        ..options()
    };
    let report = text_diff_internal("  Hello   World", "hello world", &opts).expect("diff ok");

    assert_eq!(report.stats.unchanged, 1);
    assert_eq!(report.entries[0].content, "  Hello   World");
}

#[test]
fn empty_texts_compare_as_one_blank_line() {
    let report = text_diff_internal("", "", &options()).expect("diff ok");
    assert_eq!(report.stats.unchanged, 1);
    assert_eq!(report.stats.total, 1);
}

#[test]
fn oversized_input_is_rejected_before_diffing() {
    let opts = DiffOptions {
        max_lines: 2,
        ..options()
    };
    let err = text_diff_internal("a", "a\nb\nc", &opts).unwrap_err();
    assert_eq!(
        err,
        DiffError::InputTooLarge {
            side: Side::Right,
            lines: 3,
            limit: 2,
        }
    );

    let err = unified_text_diff_internal("a\nb\nc", "a", "old", "new", &opts).unwrap_err();
    assert!(err.to_string().starts_with("left text has 3 lines"), "msg: {err}");
}

#[test]
fn unified_diff_uses_configured_context() {
    let opts = DiffOptions {
        context_lines: 0,
        ..options()
    };
    let diff = unified_text_diff_internal("a\nb\nc", "a\nB\nc", "a/x", "b/x", &opts)
        .expect("diff ok");

    assert_eq!(diff, "--- a/x\n+++ b/x\n@@ -2,1 +2,1 @@\n-b\n+B\n");
}

#[test]
fn unified_diff_of_identical_texts_is_empty() {
    let diff = unified_text_diff_internal("same", "same", "a", "b", &options()).expect("diff ok");
    assert!(diff.is_empty());
}

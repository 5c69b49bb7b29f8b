// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for batch classification of imported contacts

mod common;

use common::fixtures::{contact, crm_snapshot, persisted};
use dedup_core::{
    check_duplicate, classify_batch, BatchSummary, Contact, DuplicateMatcher, ExistingSet,
    MatcherConfig,
};

#[test]
fn test_low_scoring_candidate_keeps_validation_percent() {
    let existing = vec![persisted("1", "John Doe", "john@x.com", "555-1111")];
    let candidate = contact("Jane Smith", "jane@y.com", "555-2222");

    let results = classify_batch(std::slice::from_ref(&candidate), &existing);

    assert_eq!(results.len(), 1);
    assert!(!results[0].is_duplicate);
    assert_eq!(results[0].duplicate_score, None);
    assert!(results[0].validation_percent > 50.0);
    assert!(results[0].validation_percent < 90.0);
    assert_eq!(results[0].contact, candidate);
}

#[test]
fn test_empty_batch() {
    assert!(classify_batch(&[], &crm_snapshot()).is_empty());
}

#[test]
fn test_empty_existing_set() {
    let candidates = vec![contact("John Doe", "john@x.com", "555-1111")];
    let results = classify_batch(&candidates, &[]);

    assert_eq!(results.len(), 1);
    assert!(!results[0].is_duplicate);
    assert_eq!(results[0].validation_percent, 0.0);
}

#[test]
fn test_preserves_input_order() {
    let candidates = vec![
        contact("Tobias Kline", "tk@zeta.net", "777-4444"),
        contact("Nobody Known", "nobody@void.io", "000-0000"),
        contact("John Doe", "john@x.com", "555-1111"),
        contact("Robert Lee", "robert.lee@different.com", "555-9999"),
    ];

    let results = classify_batch(&candidates, &crm_snapshot());

    assert_eq!(results.len(), candidates.len());
    for (result, candidate) in results.iter().zip(&candidates) {
        assert_eq!(&result.contact, candidate);
    }
    let flags: Vec<bool> = results.iter().map(|r| r.is_duplicate).collect();
    assert_eq!(flags, vec![true, false, true, true]);
}

#[test]
fn test_identical_candidates_do_not_flag_each_other() {
    let twin = contact("Ada Lovelace", "ada@engine.org", "555-1815");
    let candidates = vec![twin.clone(), twin];

    let results = classify_batch(&candidates, &crm_snapshot());

    assert!(results.iter().all(|r| !r.is_duplicate));
}

#[test]
fn test_batch_agrees_with_single_checks() {
    let existing = crm_snapshot();
    let candidates = vec![
        contact("Maria Garcia", "maria.garcia@acme.com", "555-9999"),
        contact("John Smithy", "john@b.com", ""),
        persisted("3", "Robert Lee", "rob@x.com", "555-3333"),
    ];

    let results = classify_batch(&candidates, &existing);

    for (classified, candidate) in results.iter().zip(&candidates) {
        let single = check_duplicate(candidate, &existing);
        assert_eq!(classified.is_duplicate, single.is_duplicate);
        assert_eq!(classified.validation_percent, single.best_score);
        assert_eq!(
            classified.matched_id.as_deref(),
            single.matched_contact.and_then(Contact::id)
        );
    }
}

#[test]
fn test_precomputed_set_reused_across_candidates() {
    let existing = crm_snapshot();
    let set = ExistingSet::new(&existing);
    let matcher = DuplicateMatcher::new();

    let a = matcher.classify(&contact("John Doe", "john@x.com", "555-1111"), &set);
    let b = matcher.classify(&contact("Tobias Kline", "tk@zeta.net", "777-4444"), &set);

    assert_eq!(a.matched_id.as_deref(), Some("1"));
    assert_eq!(b.matched_id.as_deref(), Some("4"));
    assert_eq!(set.len(), existing.len());
}

#[test]
fn test_shared_first_name_reports_partial_similarity() {
    let existing = vec![persisted("1", "Christopher Jones", "cjones@acme.com", "555-0001")];
    let candidates = vec![contact("Christopher Smith", "csmith@other.org", "555-9876")];

    let results = classify_batch(&candidates, &existing);

    assert!(!results[0].is_duplicate);
    assert!(results[0].validation_percent < 100.0);
    assert_eq!(results[0].matched_id, None);
}

#[test]
fn test_batch_respects_matcher_config() {
    let existing = crm_snapshot();
    let candidates = vec![contact("John Doe", "john@x.com", "555-1111")];

    let strict =
        DuplicateMatcher::from_config(MatcherConfig::default().with_threshold(100.0)).unwrap();
    let results = strict.classify_batch(&candidates, &existing);

    assert!(!results[0].is_duplicate);
    assert_eq!(results[0].validation_percent, 100.0);
}

#[test]
fn test_summary_of_mixed_batch() {
    let candidates = vec![
        contact("John Doe", "john@x.com", "555-1111"),
        contact("Nobody Known", "nobody@void.io", "000-0000"),
    ];
    let results = classify_batch(&candidates, &crm_snapshot());

    let summary = BatchSummary::from_results(&results);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.duplicates, 1);
    assert_eq!(summary.unique, 1);
}

#[test]
fn test_classified_contact_json_round_trip() {
    let results = classify_batch(
        &[contact("John Doe", "john@x.com", "555-1111").with_tags(["vip"])],
        &crm_snapshot(),
    );

    let json = serde_json::to_string(&results[0]).unwrap();
    let restored: dedup_core::ClassifiedContact = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, results[0]);
}

use ecdhx_tests::vectors::{load_suite, run_suite, ExpectedResult};

#[test]
fn p256_component_vectors() {
    let suite = load_suite("ecdh_p256_component.json").unwrap();
    assert_eq!(suite.algorithm, "ECDH");

    let reports = run_suite(&suite);
    let total: usize = suite.test_groups.iter().map(|g| g.tests.len()).sum();
    assert_eq!(reports.len(), total);

    let failures: Vec<String> = reports
        .iter()
        .filter_map(|r| {
            r.outcome
                .as_ref()
                .err()
                .map(|e| format!("tg {} tc {}: {}", r.tg_id, r.tc_id, e))
        })
        .collect();
    assert!(failures.is_empty(), "vector failures:\n{}", failures.join("\n"));
}

#[test]
fn suite_covers_both_outcomes() {
    let suite = load_suite("ecdh_p256_component.json").unwrap();
    let cases: Vec<_> = suite.test_groups.iter().flat_map(|g| &g.tests).collect();
    assert!(cases.iter().any(|c| c.expected_result == ExpectedResult::Valid));
    assert!(cases.iter().any(|c| c.expected_result == ExpectedResult::Invalid));
}

#[test]
fn missing_file_is_reported() {
    assert!(load_suite("no_such_file.json").is_err());
}

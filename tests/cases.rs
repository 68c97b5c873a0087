use std::path::Path;

use calcite::{Config, ScopePolicy, harness::run_cases};
use walkdir::WalkDir;

const CASES: &str = "tests/cases";

#[test]
fn case_files_pass() {
    let report = run_cases(Path::new(CASES), Config::default()).unwrap_or_else(|e| panic!("{e}"));

    let failures: Vec<String> = report.failures.iter().map(ToString::to_string).collect();
    assert!(failures.is_empty(), "Failing cases:\n{}", failures.join("\n"));
    assert!(!report.passes.is_empty(), "No cases found in {CASES}");
}

#[test]
fn case_files_do_not_depend_on_the_scope_policy() {
    let config = Config { scope_policy: ScopePolicy::PerCall,
                          ..Config::default() };
    let report = run_cases(Path::new(CASES), config).unwrap_or_else(|e| panic!("{e}"));

    assert!(report.is_success(), "{} cases failed with fresh scopes", report.failures.len());
}

#[test]
fn every_case_file_is_picked_up() {
    let on_disk = WalkDir::new(CASES).into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "test"))
                                     .count();
    let collected = calcite::harness::case_files(Path::new(CASES)).unwrap().len();

    assert_eq!(on_disk, collected);
    assert!(collected >= 3);
}

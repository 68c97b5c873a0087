use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use walkdir::WalkDir;

use crate::{Config, Error, Interpreter, Number};

/// Separates the input from the expected result on a case line.
pub const CASE_DELIMITER: char = '~';

/// File extension of case files.
pub const CASE_EXTENSION: &str = "test";

/// Errors raised while loading case files.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The case file or directory could not be read.
    #[error("Could not read '{}': {source}", path.display())]
    Io {
        /// The path that failed.
        path:   PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// Walking a case directory failed.
    #[error("Could not walk '{}': {source}", path.display())]
    Walk {
        /// The directory being walked.
        path:   PathBuf,
        /// The underlying error.
        source: walkdir::Error,
    },
}

/// A single `input ~ expected` line of a case file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// One-based line number in the case file.
    pub line:     usize,
    /// The program to evaluate.
    pub input:    String,
    /// The expected formatted outcome.
    pub expected: String,
}

/// A case that matched its expected outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass {
    /// The case file.
    pub path:     PathBuf,
    /// One-based line number.
    pub line:     usize,
    /// The evaluated program.
    pub input:    String,
    /// The expected, and actual, outcome.
    pub expected: String,
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{}:{}:0: [PASSED] Input: {}. Expected: '{}'.",
               self.path.display(),
               self.line,
               self.input,
               self.expected)
    }
}

/// A case line that did not pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The outcome differed from the expected one.
    Mismatch {
        /// The case file.
        path:     PathBuf,
        /// One-based line number.
        line:     usize,
        /// The expected outcome.
        expected: String,
        /// The actual, formatted outcome.
        got:      String,
    },
    /// The line is missing its input or its expected result.
    Malformed {
        /// The case file.
        path:    PathBuf,
        /// One-based line number.
        line:    usize,
        /// What is missing.
        details: &'static str,
    },
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mismatch { path,
                             line,
                             expected,
                             got, } => {
                write!(f, "{}:{line}:0: [FAIL] Expected: {expected}. Got: {got}", path.display())
            },
            Self::Malformed { path, line, details } => {
                write!(f, "{}:{line}:0: [ERROR] Could not parse testcase. {details}", path.display())
            },
        }
    }
}

/// Outcome of a case run.
#[derive(Debug, Default)]
pub struct Report {
    /// Every case that matched, in file and line order.
    pub passes:   Vec<Pass>,
    /// Every case that did not match or could not be read, in file and line
    /// order.
    pub failures: Vec<Failure>,
}

impl Report {
    /// Returns `true` if no case failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Removes a `#` comment and surrounding whitespace from a line.
///
/// # Example
/// ```
/// use calcite::harness::strip_comment;
///
/// assert_eq!(strip_comment("  1 + 2 # three "), "1 + 2");
/// assert_eq!(strip_comment("# only a comment"), "");
/// ```
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(code, _)| code).trim()
}

/// Formats the outcome of an evaluation the way case files spell it.
///
/// Values use their `Display` form; every error is `error: <message>`.
#[must_use]
pub fn format_outcome(outcome: &Result<Number, Error>) -> String {
    match outcome {
        Ok(value) => value.to_string(),
        Err(e) => format!("error: {e}"),
    }
}

/// Returns `true` if `outcome` satisfies `expected`.
///
/// An expected result of exactly `error` accepts any failure; anything else
/// must equal the formatted outcome.
#[must_use]
pub fn outcome_matches(expected: &str, outcome: &Result<Number, Error>) -> bool {
    if expected == "error" {
        return outcome.is_err();
    }
    expected == format_outcome(outcome)
}

/// Splits a case file into cases.
///
/// Blank lines and lines starting with `#` are skipped. A line without a
/// delimiter, with an empty input or with an empty expected result becomes a
/// [`Failure::Malformed`] in its place; the lines after it are still read.
#[must_use]
pub fn parse_cases(path: &Path, source: &str) -> Vec<Result<Case, Failure>> {
    source.lines()
          .enumerate()
          .filter_map(|(index, raw)| {
              let trimmed = raw.trim();
              if trimmed.is_empty() || trimmed.starts_with('#') {
                  return None;
              }
              Some(parse_case(index + 1, trimmed).map_err(|details| Failure::Malformed { path: path.to_path_buf(),
                                                                                          line: index + 1,
                                                                                          details }))
          })
          .collect()
}

fn parse_case(line: usize, text: &str) -> Result<Case, &'static str> {
    let (input, expected) = text.split_once(CASE_DELIMITER)
                                .ok_or("Missing '~' delimiter.")?;
    let (input, expected) = (input.trim(), expected.trim());
    if input.is_empty() {
        return Err("Input is empty.");
    }
    if expected.is_empty() {
        return Err("Expected result is empty.");
    }

    Ok(Case { line,
              input: input.to_string(),
              expected: expected.to_string() })
}

/// Collects the case files under `root`, sorted by path.
///
/// `root` may also name a single case file.
///
/// # Errors
/// `Walk` if a directory entry cannot be read.
pub fn case_files(root: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| HarnessError::Walk { path: root.to_path_buf(),
                                                                source })?;
        let path = entry.path();
        if entry.file_type().is_file()
           && path.extension().and_then(|ext| ext.to_str()) == Some(CASE_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Runs every case of one file, each in a fresh [`Interpreter`].
///
/// Malformed lines are recorded as failures and do not stop the run.
///
/// # Errors
/// `Io` if the file cannot be read.
pub fn run_case_file(path: &Path, config: Config, report: &mut Report) -> Result<(), HarnessError> {
    let source = fs::read_to_string(path).map_err(|source| HarnessError::Io { path: path.to_path_buf(),
                                                                              source })?;

    for case in parse_cases(path, &source) {
        let case = match case {
            Ok(case) => case,
            Err(failure) => {
                report.failures.push(failure);
                continue;
            },
        };

        let outcome = Interpreter::with_config(config).eval(&case.input);
        if outcome_matches(&case.expected, &outcome) {
            report.passes.push(Pass { path:     path.to_path_buf(),
                                      line:     case.line,
                                      input:    case.input,
                                      expected: case.expected, });
        } else {
            report.failures.push(Failure::Mismatch { path:     path.to_path_buf(),
                                                     line:     case.line,
                                                     expected: case.expected,
                                                     got:      format_outcome(&outcome), });
        }
    }
    Ok(())
}

/// Runs every case file under `root`.
///
/// # Errors
/// Any error from [`case_files`] or [`run_case_file`].
pub fn run_cases(root: &Path, config: Config) -> Result<Report, HarnessError> {
    let mut report = Report::default();
    for path in case_files(root)? {
        run_case_file(&path, config, &mut report)?;
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    #[test]
    fn cases_skip_comments_and_blank_lines() {
        let source = "# header\n\n1 + 1 ~ 2\n  sqrt(4) ~ 2.0000000000  \n";
        let cases = parse_cases(Path::new("a.test"), source);

        assert_eq!(cases,
                   vec![Ok(Case { line:     3,
                                  input:    "1 + 1".to_string(),
                                  expected: "2".to_string(), }),
                        Ok(Case { line:     4,
                                  input:    "sqrt(4)".to_string(),
                                  expected: "2.0000000000".to_string(), })]);
    }

    #[test]
    fn malformed_lines_are_reported_with_their_number() {
        let malformed = |line, details| {
            Err(Failure::Malformed { path: PathBuf::from("a.test"),
                                     line,
                                     details })
        };
        let cases = parse_cases(Path::new("a.test"), "1 ~ 1\n2 + 2\n~ 1\n1 ~\n3 ~ 3\n");

        assert_eq!(cases.len(), 5);
        assert!(cases[0].is_ok());
        assert_eq!(cases[1], malformed(2, "Missing '~' delimiter."));
        assert_eq!(cases[2], malformed(3, "Input is empty."));
        assert_eq!(cases[3], malformed(4, "Expected result is empty."));
        assert!(matches!(&cases[4], Ok(Case { line: 5, .. })));
    }

    #[test]
    fn a_malformed_line_does_not_stop_the_file() {
        let dir = std::env::temp_dir().join(format!("calcite-harness-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("mixed.test");
        fs::write(&path, "1 + 1 ~ 2\nnot a case\n2 * 3 ~ 7\n4 / 0 ~ error\n").unwrap();

        let mut report = Report::default();
        run_case_file(&path, Config::default(), &mut report).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        let passed: Vec<usize> = report.passes.iter().map(|pass| pass.line).collect();
        assert_eq!(passed, vec![1, 4]);
        assert_eq!(report.failures.len(), 2);
        assert!(matches!(report.failures[0], Failure::Malformed { line: 2, .. }));
        assert!(matches!(report.failures[1], Failure::Mismatch { line: 3, .. }));
        assert!(!report.is_success());
    }

    #[test]
    fn outcome_matching() {
        let failure: Result<Number, Error> = Err(RuntimeError::DivisionByZero.into());

        assert!(outcome_matches("7", &Ok(Number::Int(7))));
        assert!(!outcome_matches("7.0000000000", &Ok(Number::Int(7))));
        assert!(outcome_matches("error", &failure));
        assert!(outcome_matches("error: Division by zero.", &failure));
        assert!(!outcome_matches("error", &Ok(Number::Int(0))));
    }

    #[test]
    fn failure_display() {
        let failure = Failure::Mismatch { path:     PathBuf::from("tests/cases/a.test"),
                                          line:     3,
                                          expected: "2".to_string(),
                                          got:      "3".to_string(), };
        assert_eq!(failure.to_string(),
                   "tests/cases/a.test:3:0: [FAIL] Expected: 2. Got: 3");

        let malformed = Failure::Malformed { path:    PathBuf::from("a.test"),
                                             line:    7,
                                             details: "Input is empty.", };
        assert_eq!(malformed.to_string(),
                   "a.test:7:0: [ERROR] Could not parse testcase. Input is empty.");
    }

    #[test]
    fn pass_display() {
        let pass = Pass { path:     PathBuf::from("a.test"),
                          line:     1,
                          input:    "1 + 1".to_string(),
                          expected: "2".to_string(), };
        assert_eq!(pass.to_string(), "a.test:1:0: [PASSED] Input: 1 + 1. Expected: '2'.");
    }
}

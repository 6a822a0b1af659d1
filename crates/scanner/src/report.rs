//! Findings and report rendering

use owo_colors::OwoColorize;
use secretgate_core::error::exit_codes;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A single detected secret
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// File the match was found in
    pub file: PathBuf,
    /// Name of the rule that matched
    pub rule: String,
    /// 1-based line number of the first match
    pub line: usize,
    /// Masked excerpt of the matched text
    pub matched: String,
}

/// All findings of one scan invocation, in file-then-rule order
#[derive(Debug, Default)]
pub struct ScanReport {
    findings: Vec<Finding>,
}

impl ScanReport {
    /// Wrap an ordered list of findings
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// True when no rule matched anywhere
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of findings
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// True when the report holds no findings
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// All findings in report order
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings grouped by file, preserving first-encounter order
    pub fn by_file(&self) -> Vec<(&Path, Vec<&Finding>)> {
        let mut groups: Vec<(&Path, Vec<&Finding>)> = Vec::new();
        for finding in &self.findings {
            match groups.iter_mut().find(|(f, _)| *f == finding.file.as_path()) {
                Some((_, entries)) => entries.push(finding),
                None => groups.push((finding.file.as_path(), vec![finding])),
            }
        }
        groups
    }

    /// JSON form: `{"results": {file: [{type, line_number}]}}`
    pub fn to_json(&self) -> serde_json::Value {
        #[derive(Serialize)]
        struct JsonFinding<'a> {
            #[serde(rename = "type")]
            rule: &'a str,
            line_number: usize,
        }

        let mut results = serde_json::Map::new();
        for (file, findings) in self.by_file() {
            let entries: Vec<_> = findings
                .iter()
                .map(|f| JsonFinding {
                    rule: &f.rule,
                    line_number: f.line,
                })
                .collect();
            results.insert(
                file.to_string_lossy().into_owned(),
                serde_json::to_value(entries).unwrap_or_default(),
            );
        }

        serde_json::json!({ "results": results })
    }
}

/// Mask a secret for display (show first/last few chars)
///
/// Cuts on character boundaries; matched text is not guaranteed to be
/// ASCII (quoted password values for one).
pub(crate) fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 8 {
        "*".repeat(count)
    } else {
        let head: String = secret.chars().take(4).collect();
        let tail: String = secret.chars().skip(count - 4).collect();
        format!("{}...{}", head, tail)
    }
}

/// Print the findings report to stderr and return the exit code
pub fn print_report(report: &ScanReport) -> i32 {
    if report.is_clean() {
        return exit_codes::SUCCESS;
    }

    eprintln!(
        "{} Found {} potential secret(s) in staged files:",
        "ERROR".red(),
        report.len()
    );
    eprintln!();

    for (file, findings) in report.by_file() {
        eprintln!("  {}", file.display().to_string().bold());
        for f in findings {
            eprintln!(
                "    - {} at line {} ({})",
                f.rule.cyan(),
                f.line,
                f.matched.dimmed()
            );
        }
        eprintln!();
    }

    eprintln!("Secrets were found in staged files. Remove them and try again.");
    exit_codes::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(file: &str, rule: &str, line: usize) -> Finding {
        Finding {
            file: PathBuf::from(file),
            rule: rule.to_string(),
            line,
            matched: mask_secret("abcdefghijklmnop"),
        }
    }

    #[test]
    fn test_mask_secret_short() {
        assert_eq!(mask_secret("abc"), "***");
    }

    #[test]
    fn test_mask_secret_long() {
        let masked = mask_secret("abcdefghijklmnop");
        assert!(masked.starts_with("abcd"));
        assert!(masked.ends_with("mnop"));
        assert!(masked.contains("..."));
    }

    #[test]
    fn test_mask_secret_multibyte() {
        let masked = mask_secret("password = \"aaaaaaéé\"");
        assert!(masked.starts_with("pass"));
        assert!(masked.ends_with("aéé\""));
    }

    #[test]
    fn test_mask_secret_short_multibyte() {
        assert_eq!(mask_secret("ééé"), "***");
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = ScanReport::default();
        assert!(report.is_clean());
        assert_eq!(print_report(&report), exit_codes::SUCCESS);
    }

    #[test]
    fn test_by_file_groups_in_encounter_order() {
        let report = ScanReport::new(vec![
            finding("a.txt", "SLACK_TOKEN", 3),
            finding("a.txt", "GITHUB_PAT", 7),
            finding("b.txt", "JWT", 1),
        ]);

        let groups = report.by_file();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Path::new("a.txt"));
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, Path::new("b.txt"));
    }

    #[test]
    fn test_json_shape() {
        let report = ScanReport::new(vec![finding("config.txt", "GITHUB_PAT", 4)]);
        let json = report.to_json();

        assert_eq!(json["results"]["config.txt"][0]["type"], "GITHUB_PAT");
        assert_eq!(json["results"]["config.txt"][0]["line_number"], 4);
    }

    #[test]
    fn test_print_report_signals_failure() {
        let report = ScanReport::new(vec![finding("a.txt", "SLACK_TOKEN", 1)]);
        assert_eq!(print_report(&report), exit_codes::FAILURE);
    }
}

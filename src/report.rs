use colored::*;
use serde::Serialize;

use crate::finder;

/// Outcome of one solve, ready for rendering. "No pair" is a normal
/// outcome, so it is part of the report rather than an error.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub target: i64,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indices: Option<[usize; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<[i64; 2]>,
}

impl SolveReport {
    pub fn new(sequence: &[i64], target: i64) -> Self {
        match finder::find_pair(sequence, target) {
            Some((i, j)) => Self {
                target,
                found: true,
                indices: Some([i, j]),
                values: Some([sequence[i], sequence[j]]),
            },
            None => Self {
                target,
                found: false,
                indices: None,
                values: None,
            },
        }
    }

    /// Print the human-readable report. `one_based` only shifts the
    /// displayed indices; the underlying report stays zero-based.
    pub fn print_plain(&self, one_based: bool) {
        match (self.indices, self.values) {
            (Some([i, j]), Some([a, b])) => {
                let shift = usize::from(one_based);
                println!("{}", "✓ Pair found".green().bold());
                println!("  {} {} and {}", "Indices:".bold(), i + shift, j + shift);
                println!("  {} {} + {} = {}", "Values:".bold(), a, b, self.target);
            }
            _ => {
                println!("{}", "✗ No solution found.".red().bold());
                println!("  {} {}", "Target:".bold(), self.target);
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_carries_the_found_pair() {
        let report = SolveReport::new(&[2, 7, 11, 15], 9);
        assert!(report.found);
        assert_eq!(report.indices, Some([0, 1]));
        assert_eq!(report.values, Some([2, 7]));
        assert_eq!(report.target, 9);
    }

    #[test]
    fn report_for_no_pair() {
        let report = SolveReport::new(&[1, 2, 3], 100);
        assert!(!report.found);
        assert_eq!(report.indices, None);
        assert_eq!(report.values, None);
    }

    #[test]
    fn json_includes_the_pair() {
        let report = SolveReport::new(&[3, 2, 4], 6);
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["found"], true);
        assert_eq!(json["indices"][0], 1);
        assert_eq!(json["indices"][1], 2);
        assert_eq!(json["values"][0], 2);
        assert_eq!(json["values"][1], 4);
    }

    #[test]
    fn json_omits_absent_pair() {
        let report = SolveReport::new(&[], 6);
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["found"], false);
        assert!(json.get("indices").is_none());
        assert!(json.get("values").is_none());
    }
}

//! # Reply Rendering
//!
//! One reply per executed command, rendered either as the plain text
//! protocol or as a JSON object.
//!
//! Text weights use six significant digits in `%g` style, so float sums
//! like `1.1 + 2.2` print as `3.3`. JSON keeps the full `f64`.

use relgraph_core::{HighestPath, Neighbor, WeightedPath};
use serde_json::{Value, json};

/// Significant digits in text-rendered weights.
const SIGNIFICANT_DIGITS: usize = 6;

/// Outcome of one shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Success,
    Failure,
    IllegalArgument,
    /// `PRINT`: the node's neighbors, possibly none.
    Neighbors(Vec<Neighbor>),
    /// `FINDALL`: matching ids.
    Ids(Vec<String>),
    Path(WeightedPath),
    Highest(HighestPath),
}

impl Reply {
    /// Status word used by the JSON rendering.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            Self::Failure => "failure",
            Self::IllegalArgument => "illegal_argument",
            _ => "success",
        }
    }

    /// Plain text line, without the trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Success => "success".to_string(),
            Self::Failure => "failure".to_string(),
            Self::IllegalArgument => "illegal argument".to_string(),
            Self::Neighbors(neighbors) => neighbors
                .iter()
                .map(|n| n.id.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Self::Ids(ids) => ids.join(" "),
            Self::Path(path) => {
                format!("{} {}", path.nodes.join(" "), format_weight(path.weight))
            }
            Self::Highest(h) => format!(
                "{} {} {}",
                h.source,
                h.destination,
                format_weight(h.weight)
            ),
        }
    }

    /// JSON object tagged with the command keyword.
    #[must_use]
    pub fn to_json(&self, command: &str) -> Value {
        let mut value = json!({
            "command": command,
            "status": self.status(),
        });
        let payload = match self {
            Self::Neighbors(neighbors) => json!({ "neighbors": neighbors }),
            Self::Ids(ids) => json!({ "ids": ids }),
            Self::Path(path) => json!({
                "path": path.nodes,
                "hops": path.hops(),
                "weight": path.weight,
            }),
            Self::Highest(h) => json!({
                "source": h.source,
                "destination": h.destination,
                "weight": h.weight,
            }),
            Self::Success | Self::Failure | Self::IllegalArgument => return value,
        };
        if let (Some(target), Value::Object(extra)) = (value.as_object_mut(), payload) {
            target.extend(extra);
        }
        value
    }
}

/// Render a weight with `SIGNIFICANT_DIGITS` significant digits, dropping
/// trailing zeros. Exponents below -4 or at least `SIGNIFICANT_DIGITS`
/// switch to scientific notation (`1.23457e+06`).
pub fn format_weight(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    // Rounds the mantissa first, so 999999.7 moves to exponent 6.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use relgraph_core::EdgeWeight;

    fn path(nodes: &[&str], weight: f64) -> Reply {
        Reply::Path(WeightedPath {
            nodes: nodes.iter().map(|s| s.to_string()).collect(),
            weight,
        })
    }

    #[test]
    fn status_words() {
        assert_eq!(Reply::Success.to_text(), "success");
        assert_eq!(Reply::Failure.to_text(), "failure");
        assert_eq!(Reply::IllegalArgument.to_text(), "illegal argument");
    }

    #[test]
    fn path_text_drops_trailing_zeros() {
        assert_eq!(path(&["A", "B", "C"], 8.0).to_text(), "A B C 8");
        assert_eq!(path(&["A", "B"], 3.5).to_text(), "A B 3.5");
        assert_eq!(path(&["A"], 0.0).to_text(), "A 0");
    }

    #[test]
    fn path_text_rounds_float_sums() {
        assert_eq!(path(&["A", "B", "C"], 1.1 + 2.2).to_text(), "A B C 3.3");
    }

    #[test]
    fn weight_formatting_matches_six_significant_digits() {
        assert_eq!(format_weight(8.0), "8");
        assert_eq!(format_weight(0.5), "0.5");
        assert_eq!(format_weight(3.3000000000000003), "3.3");
        assert_eq!(format_weight(123456.0), "123456");
        assert_eq!(format_weight(1234567.0), "1.23457e+06");
        assert_eq!(format_weight(999999.7), "1e+06");
        assert_eq!(format_weight(0.0001), "0.0001");
        assert_eq!(format_weight(0.00001234), "1.234e-05");
        assert_eq!(format_weight(2.0 / 3.0), "0.666667");
    }

    #[test]
    fn isolated_node_prints_empty_line() {
        assert_eq!(Reply::Neighbors(Vec::new()).to_text(), "");
    }

    #[test]
    fn highest_text() {
        let reply = Reply::Highest(HighestPath {
            source: "c".into(),
            destination: "d".into(),
            weight: 9.0,
        });
        assert_eq!(reply.to_text(), "c d 9");
    }

    #[test]
    fn json_merges_payload() {
        let reply = Reply::Neighbors(vec![Neighbor {
            id: "b".into(),
            weight: EdgeWeight::new(2.5).expect("weight"),
            label: "knows".into(),
        }]);
        let value = reply.to_json("PRINT");

        assert_eq!(value["command"], "PRINT");
        assert_eq!(value["status"], "success");
        assert_eq!(value["neighbors"][0]["id"], "b");
        assert_eq!(value["neighbors"][0]["weight"], 2.5);
        assert_eq!(value["neighbors"][0]["label"], "knows");
    }

    #[test]
    fn json_status_only_replies() {
        let value = Reply::IllegalArgument.to_json("RELATIONSHIP");
        assert_eq!(
            value,
            json!({ "command": "RELATIONSHIP", "status": "illegal_argument" })
        );
    }
}

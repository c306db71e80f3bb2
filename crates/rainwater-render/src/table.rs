//! Per-index breakdown table.

use crate::svg::escape;
use rainwater_core::WaterProfile;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Column headers, in row order.
pub const HEADERS: [&str; 5] = ["i", "height", "leftMax", "rightMax", "water"];

/// One row of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRow {
    /// Column index
    pub index: usize,
    /// Column height
    pub height: u32,
    /// Highest column at or left of this one
    pub left_max: u32,
    /// Highest column at or right of this one
    pub right_max: u32,
    /// Water resting above this column
    pub water: u32,
}

impl BreakdownRow {
    fn cells(&self) -> [String; 5] {
        [
            self.index.to_string(),
            self.height.to_string(),
            self.left_max.to_string(),
            self.right_max.to_string(),
            self.water.to_string(),
        ]
    }
}

/// A maximal run of adjacent columns holding water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basin {
    /// First column of the run
    pub first: usize,
    /// Last column of the run (inclusive)
    pub last: usize,
    /// Water held across the run
    pub volume: u64,
}

impl fmt::Display for Basin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{} ({} units)", self.first, self.volume)
        } else {
            write!(f, "{}-{} ({} units)", self.first, self.last, self.volume)
        }
    }
}

/// The full table: one row per column plus the total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Rows in index order
    pub rows: Vec<BreakdownRow>,
    /// Sum of the water column
    pub total: u64,
    /// Water-holding runs, left to right
    pub basins: Vec<Basin>,
}

impl Breakdown {
    /// Build the table from heights and their profile.
    #[must_use]
    pub fn new(heights: &[u32], profile: &WaterProfile) -> Self {
        let rows = heights
            .iter()
            .enumerate()
            .zip(profile.left_max.iter().zip(&profile.right_max).zip(&profile.water))
            .map(|((index, &height), ((&left_max, &right_max), &water))| BreakdownRow {
                index,
                height,
                left_max,
                right_max,
                water,
            })
            .collect();
        let basins = profile
            .basins()
            .into_iter()
            .map(|run| Basin {
                first: run.start,
                last: run.end - 1,
                volume: profile.water[run].iter().map(|&w| u64::from(w)).sum(),
            })
            .collect();
        Self {
            rows,
            total: profile.total,
            basins,
        }
    }

    /// One-line basin report, e.g. `Basins: 2-4 (12 units), 6 (6 units)`.
    #[must_use]
    pub fn basin_summary(&self) -> String {
        if self.basins.is_empty() {
            return "Basins: none".to_string();
        }
        let runs: Vec<String> = self.basins.iter().map(ToString::to_string).collect();
        format!("Basins: {}", runs.join(", "))
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render in the requested format.
    #[must_use]
    pub fn render(&self, format: TableFormat) -> String {
        match format {
            TableFormat::Text => self.to_text(),
            TableFormat::Markdown => self.to_markdown(),
            TableFormat::Json => self.to_json(),
        }
    }

    /// Right-aligned plain-text columns with a header rule.
    #[must_use]
    pub fn to_text(&self) -> String {
        let cells: Vec<[String; 5]> = self.rows.iter().map(BreakdownRow::cells).collect();
        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        let mut out = String::new();
        let line = |out: &mut String, row: &[&str]| {
            let joined: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:>w$}"))
                .collect();
            out.push_str(&joined.join("  "));
            out.push('\n');
        };

        line(&mut out, &HEADERS[..]);
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
        line(&mut out, rule.as_slice());
        for row in &cells {
            let row: Vec<&str> = row.iter().map(String::as_str).collect();
            line(&mut out, row.as_slice());
        }
        out
    }

    /// GitHub-flavored markdown table.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = format!("| {} |\n", HEADERS.join(" | "));
        out.push_str("|---:|---:|---:|---:|---:|\n");
        for row in &self.rows {
            let _ = writeln!(out, "| {} |", row.cells().join(" | "));
        }
        out
    }

    /// `<tr>` rows for an HTML `<tbody>`.
    #[must_use]
    pub fn to_html_rows(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str("<tr>");
            for cell in row.cells() {
                let _ = write!(out, "<td>{}</td>", escape(&cell));
            }
            out.push_str("</tr>\n");
        }
        out
    }

    /// Pretty-printed JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Plain integers and strings only; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output format for the breakdown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Aligned plain text
    #[default]
    Text,
    /// Markdown table
    Markdown,
    /// JSON document
    Json,
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown table format '{other}' (expected text, markdown or json)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rainwater_core::EXAMPLE_HEIGHTS;

    fn example() -> Breakdown {
        Breakdown::new(&EXAMPLE_HEIGHTS, &WaterProfile::compute(&EXAMPLE_HEIGHTS))
    }

    #[test]
    fn test_rows_follow_profile() {
        let table = example();
        assert_eq!(table.len(), 10);
        assert_eq!(table.total, 18);
        assert_eq!(
            table.rows[6],
            BreakdownRow {
                index: 6,
                height: 0,
                left_max: 6,
                right_max: 6,
                water: 6,
            }
        );
    }

    #[test]
    fn test_basins() {
        let table = example();
        assert_eq!(
            table.basins,
            vec![
                Basin {
                    first: 2,
                    last: 4,
                    volume: 12
                },
                Basin {
                    first: 6,
                    last: 6,
                    volume: 6
                },
            ]
        );
        assert_eq!(table.basin_summary(), "Basins: 2-4 (12 units), 6 (6 units)");
        let volume: u64 = table.basins.iter().map(|b| b.volume).sum();
        assert_eq!(volume, table.total);
    }

    #[test]
    fn test_no_basins() {
        let table = Breakdown::new(&[1, 2, 3], &WaterProfile::compute(&[1, 2, 3]));
        assert!(table.basins.is_empty());
        assert_eq!(table.basin_summary(), "Basins: none");
    }

    #[test]
    fn test_empty_table() {
        let table = Breakdown::new(&[], &WaterProfile::compute(&[]));
        assert!(table.is_empty());
        assert_eq!(table.total, 0);
        assert_eq!(table.to_html_rows(), "");
    }

    #[test]
    fn test_to_text() {
        let table = Breakdown::new(&[2, 0, 2], &WaterProfile::compute(&[2, 0, 2]));
        let expected = "\
i  height  leftMax  rightMax  water
-  ------  -------  --------  -----
0       2        2         2      0
1       0        2         2      2
2       2        2         2      0
";
        assert_eq!(table.to_text(), expected);
    }

    #[test]
    fn test_to_markdown() {
        let table = Breakdown::new(&[1], &WaterProfile::compute(&[1]));
        assert_eq!(
            table.to_markdown(),
            "| i | height | leftMax | rightMax | water |\n|---:|---:|---:|---:|---:|\n| 0 | 1 | 1 | 1 | 0 |\n"
        );
    }

    #[test]
    fn test_to_html_rows() {
        let table = Breakdown::new(&[1, 0], &WaterProfile::compute(&[1, 0]));
        assert_eq!(
            table.to_html_rows(),
            "<tr><td>0</td><td>1</td><td>1</td><td>1</td><td>0</td></tr>\n\
             <tr><td>1</td><td>0</td><td>1</td><td>0</td><td>0</td></tr>\n"
        );
    }

    #[test]
    fn test_to_json_uses_camel_case() {
        let json = example().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 18);
        assert_eq!(value["rows"][2]["leftMax"], 4);
        assert_eq!(value["rows"][2]["rightMax"], 6);
        assert_eq!(value["rows"][2]["water"], 4);
        assert_eq!(value["basins"][0]["first"], 2);
        assert_eq!(value["basins"][0]["volume"], 12);
    }

    #[test]
    fn test_table_format_from_str() {
        assert_eq!("md".parse::<TableFormat>(), Ok(TableFormat::Markdown));
        assert_eq!("JSON".parse::<TableFormat>(), Ok(TableFormat::Json));
        assert_eq!("text".parse::<TableFormat>(), Ok(TableFormat::Text));
        assert!("xml".parse::<TableFormat>().is_err());
    }

    #[test]
    fn test_render_dispatch() {
        let table = example();
        assert_eq!(table.render(TableFormat::Markdown), table.to_markdown());
        assert_eq!(table.render(TableFormat::Json), table.to_json());
    }
}

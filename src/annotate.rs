//! Inline pause-point markers for script source.

use std::collections::BTreeMap;

use tracing::warn;

use pausepoints_cdp::PausePoint;

/// One-character marker code for a breakpoint location type.
pub(crate) fn type_code(kind: Option<&str>) -> char {
    match kind {
        Some("call") => 'c',
        Some("debuggerStatement") => 'd',
        Some("return") => 'r',
        _ => 'o',
    }
}

/// Splice a `/*X*/` marker into `text` at every pause point.
///
/// Points are grouped by line and applied right-to-left within each line,
/// so a splice never shifts the column of one still to be applied. Equal
/// (line, column) pairs are not deduplicated; their markers read in input
/// order. A point past the last line is skipped, and a column past the
/// end of its line clamps to the line end.
pub(crate) fn annotate(text: &str, points: &[PausePoint]) -> String {
    let mut by_line: BTreeMap<usize, Vec<(usize, &PausePoint)>> = BTreeMap::new();
    for (idx, point) in points.iter().enumerate() {
        by_line
            .entry(point.line as usize)
            .or_default()
            .push((idx, point));
    }

    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    for (line_no, mut line_points) in by_line {
        let Some(line) = lines.get_mut(line_no) else {
            warn!("Pause point on line {} is past the end of the source", line_no);
            continue;
        };

        // Rightmost column first; on equal columns the later point goes
        // in first so the earlier one ends up to its left.
        line_points.sort_by(|&(ai, a), &(bi, b)| (b.column, bi).cmp(&(a.column, ai)));

        for (_, point) in line_points {
            let marker = format!("/*{}*/", type_code(point.kind.as_deref()));
            insert_at(line, point.column as usize, &marker);
        }
    }

    lines.join("\n")
}

/// Insert `marker` at a character (not byte) column, clamped to line end.
fn insert_at(line: &mut String, column: usize, marker: &str) {
    let at = line
        .char_indices()
        .nth(column)
        .map_or(line.len(), |(i, _)| i);
    line.insert_str(at, marker);
}

#[cfg(test)]
#[path = "annotate_tests.rs"]
mod tests;

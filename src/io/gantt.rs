/*!
 * Gantt Rendering
 * Proportional text timeline of execution segments
 */

use crate::core::types::Tick;
use crate::scheduler::Segment;

/// A run of columns on the chart: a segment, or an idle gap (`label = None`)
struct Piece<'a> {
    label: Option<&'a str>,
    start: Tick,
    end: Tick,
}

/// Render `segments` as a two-line chart scaled to roughly `width` columns
///
/// The first line holds one bar per segment labelled with its process id;
/// idle gaps are left blank. The second line marks the start tick of every
/// bar and the final end tick. Bars never shrink below their label or below
/// their start tick, so adjacent tick labels stay separated.
pub fn render_gantt(segments: &[Segment], width: usize) -> String {
    let Some(last) = segments.last() else {
        return String::new();
    };
    let makespan = last.end.max(1);
    let width = width.max(1);
    let column = |t: Tick| (t as u128 * width as u128 / makespan as u128) as usize;

    let mut pieces = Vec::with_capacity(segments.len() * 2);
    let mut cursor: Tick = 0;
    for seg in segments {
        if seg.start > cursor {
            pieces.push(Piece {
                label: None,
                start: cursor,
                end: seg.start,
            });
        }
        pieces.push(Piece {
            label: Some(seg.id.as_str()),
            start: seg.start,
            end: seg.end,
        });
        cursor = seg.end;
    }

    let mut bar = String::new();
    let mut axis = String::new();
    for piece in &pieces {
        let label = piece.label.unwrap_or("");
        let tick = piece.start.to_string();
        // Wide enough for the label and for the start tick plus a gap
        let cells = (column(piece.end) - column(piece.start))
            .max(label.chars().count())
            .max(tick.len())
            .max(1);

        pad_to(&mut axis, bar.chars().count());
        axis.push_str(&tick);

        bar.push('|');
        bar.push_str(&format!("{:^cells$}", label, cells = cells));
    }
    pad_to(&mut axis, bar.chars().count());
    axis.push_str(&last.end.to_string());
    bar.push('|');

    format!("{}\n{}", bar, axis)
}

fn pad_to(line: &mut String, len: usize) {
    let current = line.chars().count();
    if current < len {
        line.extend(std::iter::repeat(' ').take(len - current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(render_gantt(&[], 40), "");
    }

    #[test]
    fn test_proportional_layout() {
        let segments = vec![
            Segment::new("A", 0, 5),
            Segment::new("B", 5, 8),
            Segment::new("C", 8, 16),
        ];
        let chart = render_gantt(&segments, 16);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "|  A  | B |   C    |");
        assert_eq!(lines[1], "0     5   8        16");
    }

    #[test]
    fn test_idle_gap_is_blank() {
        let segments = vec![Segment::new("A", 0, 2), Segment::new("B", 4, 6)];
        let chart = render_gantt(&segments, 6);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "|A |  |B |");
        assert_eq!(lines[1], "0  2  4  6");
    }

    #[test]
    fn test_wide_ticks_stay_separated() {
        let segments = vec![Segment::new("A", 100, 101), Segment::new("B", 101, 102)];
        let chart = render_gantt(&segments, 10);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "|         | A | B |");
        assert_eq!(lines[1], "0         100 101 102");
    }
}

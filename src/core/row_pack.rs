//! Interval partitioning of annotations into non-overlapping rows.
//!
//! Greedy first-fit over annotations sorted by start time. The sort order
//! (start ascending, end ascending on ties) guarantees that the last element
//! of every row carries the latest end time seen in that row, so fitting an
//! annotation only needs to test each row's last occupant. The greedy
//! assignment is optimal in row count for interval partitioning.

use crate::state::Annotation;

/// Assign annotations to rows so that no two annotations in a row overlap
/// in time, using the minimum number of rows.
///
/// Intervals are half-open `[time_start, time_end)`: an annotation starting
/// exactly where a row's last occupant ends shares that row. Rows are tried
/// in order and a new row is created only when every existing row rejects
/// the annotation, which makes the result deterministic for a given set.
///
/// Packing consumes the full set regardless of the video duration;
/// annotations past the end of the video are filtered at render time only,
/// so row indices stay stable when the duration is revised.
pub fn pack(annotations: &[Annotation]) -> Vec<Vec<Annotation>> {
    let mut sorted: Vec<Annotation> = annotations.to_vec();
    sorted.sort_by(|a, b| {
        a.time_start()
            .total_cmp(&b.time_start())
            .then(a.time_end().total_cmp(&b.time_end()))
    });

    let mut rows: Vec<Vec<Annotation>> = Vec::new();
    for annotation in sorted {
        let fitting_row = rows.iter_mut().find(|row| match row.last() {
            Some(prev) => annotation.time_start() >= prev.time_end(),
            None => true,
        });
        match fitting_row {
            Some(row) => row.push(annotation),
            None => rows.push(vec![annotation]),
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Annotation;

    fn annotation(start: f64, end: f64) -> Annotation {
        Annotation::new(start, end).unwrap()
    }

    fn intervals(row: &[Annotation]) -> Vec<(f64, f64)> {
        row.iter()
            .map(|a| (a.time_start(), a.time_end()))
            .collect()
    }

    /// Largest number of intervals covering any single instant, counting
    /// interval starts before ends at equal times (half-open semantics).
    fn max_instantaneous_overlap(annotations: &[Annotation]) -> usize {
        let mut events: Vec<(f64, i32)> = annotations
            .iter()
            .flat_map(|a| [(a.time_start(), 1), (a.time_end(), -1)])
            .collect();
        events.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        let mut current = 0i32;
        let mut max = 0i32;
        for (_, delta) in events {
            current += delta;
            max = max.max(current);
        }
        max as usize
    }

    #[test]
    fn test_empty_set() {
        assert!(pack(&[]).is_empty());
    }

    #[test]
    fn test_disjoint_intervals_share_one_row() {
        let set = [annotation(0.0, 2.0), annotation(5.0, 7.0), annotation(3.0, 4.0)];
        let rows = pack(&set);
        assert_eq!(rows.len(), 1);
        assert_eq!(intervals(&rows[0]), vec![(0.0, 2.0), (3.0, 4.0), (5.0, 7.0)]);
    }

    #[test]
    fn test_overlap_chain_scenario() {
        // {3,8} starts before {0,5} ends; {6,10} starts after and fits row 0.
        let set = [annotation(0.0, 5.0), annotation(3.0, 8.0), annotation(6.0, 10.0)];
        let rows = pack(&set);
        assert_eq!(rows.len(), 2);
        assert_eq!(intervals(&rows[0]), vec![(0.0, 5.0), (6.0, 10.0)]);
        assert_eq!(intervals(&rows[1]), vec![(3.0, 8.0)]);
    }

    #[test]
    fn test_back_to_back_intervals_share_a_row() {
        let set = [annotation(0.0, 5.0), annotation(5.0, 10.0)];
        let rows = pack(&set);
        assert_eq!(rows.len(), 1);
        assert_eq!(intervals(&rows[0]), vec![(0.0, 5.0), (5.0, 10.0)]);
    }

    #[test]
    fn test_identical_intervals_stack() {
        let set = [annotation(1.0, 2.0), annotation(1.0, 2.0), annotation(1.0, 2.0)];
        let rows = pack(&set);
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(intervals(row), vec![(1.0, 2.0)]);
        }
    }

    #[test]
    fn test_no_same_row_overlap_and_optimal_row_count() {
        let set = [
            annotation(0.0, 4.0),
            annotation(1.0, 3.0),
            annotation(2.0, 6.0),
            annotation(4.0, 5.0),
            annotation(5.0, 9.0),
            annotation(5.5, 7.0),
            annotation(8.0, 12.0),
            annotation(9.0, 10.0),
        ];
        let rows = pack(&set);

        for row in &rows {
            for pair in row.windows(2) {
                assert!(
                    pair[1].time_start() >= pair[0].time_end(),
                    "row contains overlapping intervals: {:?}",
                    intervals(row)
                );
            }
        }
        assert_eq!(rows.len(), max_instantaneous_overlap(&set));
    }

    #[test]
    fn test_deterministic_for_reordered_input() {
        let set = [
            annotation(0.0, 5.0),
            annotation(3.0, 8.0),
            annotation(6.0, 10.0),
            annotation(8.0, 9.0),
        ];
        let mut reversed = set.to_vec();
        reversed.reverse();

        let rows_a: Vec<Vec<(f64, f64)>> = pack(&set).iter().map(|r| intervals(r)).collect();
        let rows_b: Vec<Vec<(f64, f64)>> = pack(&reversed).iter().map(|r| intervals(r)).collect();
        assert_eq!(rows_a, rows_b);
    }

    #[test]
    fn test_tie_on_start_packs_shorter_interval_first() {
        let set = [annotation(0.0, 9.0), annotation(0.0, 2.0)];
        let rows = pack(&set);
        assert_eq!(rows.len(), 2);
        assert_eq!(intervals(&rows[0]), vec![(0.0, 2.0)]);
        assert_eq!(intervals(&rows[1]), vec![(0.0, 9.0)]);
    }
}

//! Single-line compress and merge steps.
//!
//! Both steps work on a `Line` in board order and take the `Edge` tiles
//! are moving toward, so one implementation serves all four directions.

use crate::core::{Edge, Line, BOARD_SIZE, EMPTY};

/// Merges performed on one line during one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineMerge {
    /// Number of tile pairs combined.
    pub merges: u32,
    /// Sum of the merged tile values.
    pub score: u64,
}

impl LineMerge {
    /// True if at least one pair merged.
    #[must_use]
    pub fn merged(&self) -> bool {
        self.merges > 0
    }
}

/// Pack the tiles of `line` against `edge`, keeping their order.
///
/// Returns true iff any tile ended up at a different index.
///
/// ```
/// use merge_grid::core::Edge;
/// use merge_grid::rules::compress_line;
///
/// let mut line = [0, 2, 0, 4];
/// assert!(compress_line(&mut line, Edge::Leading));
/// assert_eq!(line, [2, 4, 0, 0]);
/// assert!(!compress_line(&mut line, Edge::Leading));
/// ```
pub fn compress_line(line: &mut Line, edge: Edge) -> bool {
    let order = edge.scan_order();
    let mut packed = [EMPTY; BOARD_SIZE];
    let mut write = 0;
    let mut moved = false;

    for &read in &order {
        let value = line[read];
        if value == EMPTY {
            continue;
        }
        let target = order[write];
        packed[target] = value;
        moved |= target != read;
        write += 1;
    }

    *line = packed;
    moved
}

/// Merge equal neighbours in one pass, scanning outward from `edge`.
///
/// The cell nearer the edge takes the doubled value and its partner is
/// emptied. Scanning resumes past the consumed pair, so a tile produced by
/// a merge never merges again in the same pass. Expects a line already
/// compressed toward `edge`.
///
/// ```
/// use merge_grid::core::Edge;
/// use merge_grid::rules::merge_line;
///
/// let mut line = [2, 2, 2, 0];
/// let merge = merge_line(&mut line, Edge::Leading);
/// assert_eq!(line, [4, 0, 2, 0]);
/// assert_eq!(merge.score, 4);
/// ```
pub fn merge_line(line: &mut Line, edge: Edge) -> LineMerge {
    let order = edge.scan_order();
    let mut result = LineMerge::default();
    let mut i = 0;

    while i + 1 < BOARD_SIZE {
        let (near, far) = (order[i], order[i + 1]);
        if line[near] != EMPTY && line[near] == line[far] {
            line[near] *= 2;
            line[far] = EMPTY;
            result.merges += 1;
            result.score += u64::from(line[near]);
            i += 2;
        } else {
            i += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_leading() {
        let mut line = [0, 2, 0, 2];
        assert!(compress_line(&mut line, Edge::Leading));
        assert_eq!(line, [2, 2, 0, 0]);
    }

    #[test]
    fn test_compress_trailing() {
        let mut line = [4, 0, 8, 0];
        assert!(compress_line(&mut line, Edge::Trailing));
        assert_eq!(line, [0, 0, 4, 8]);
    }

    #[test]
    fn test_compress_already_packed() {
        let mut line = [2, 4, 0, 0];
        assert!(!compress_line(&mut line, Edge::Leading));
        assert_eq!(line, [2, 4, 0, 0]);

        let mut line = [0, 0, 2, 4];
        assert!(!compress_line(&mut line, Edge::Trailing));
        assert_eq!(line, [0, 0, 2, 4]);
    }

    #[test]
    fn test_compress_empty_and_full() {
        let mut empty = [0; 4];
        assert!(!compress_line(&mut empty, Edge::Leading));
        assert!(!compress_line(&mut empty, Edge::Trailing));

        let mut full = [2, 4, 8, 16];
        assert!(!compress_line(&mut full, Edge::Leading));
        assert!(!compress_line(&mut full, Edge::Trailing));
        assert_eq!(full, [2, 4, 8, 16]);
    }

    #[test]
    fn test_compress_is_idempotent() {
        for edge in [Edge::Leading, Edge::Trailing] {
            let mut line = [0, 8, 0, 2];
            assert!(compress_line(&mut line, edge));
            let once = line;
            assert!(!compress_line(&mut line, edge));
            assert_eq!(line, once);
        }
    }

    #[test]
    fn test_merge_pair() {
        let mut line = [2, 2, 0, 0];
        let merge = merge_line(&mut line, Edge::Leading);
        assert_eq!(line, [4, 0, 0, 0]);
        assert_eq!(merge, LineMerge { merges: 1, score: 4 });
        assert!(merge.merged());
    }

    #[test]
    fn test_merge_three_equal_leaves_one() {
        let mut line = [2, 2, 2, 0];
        let merge = merge_line(&mut line, Edge::Leading);
        assert_eq!(line, [4, 0, 2, 0]);
        assert_eq!(merge.merges, 1);

        // Toward the trailing edge the pair nearest that edge merges.
        let mut line = [0, 2, 2, 2];
        let merge = merge_line(&mut line, Edge::Trailing);
        assert_eq!(line, [0, 2, 0, 4]);
        assert_eq!(merge.score, 4);
    }

    #[test]
    fn test_merge_four_equal_gives_two_pairs() {
        let mut line = [2, 2, 2, 2];
        let merge = merge_line(&mut line, Edge::Leading);
        assert_eq!(line, [4, 0, 4, 0]);
        assert_eq!(merge, LineMerge { merges: 2, score: 8 });

        let mut line = [8, 8, 8, 8];
        let merge = merge_line(&mut line, Edge::Trailing);
        assert_eq!(line, [0, 16, 0, 16]);
        assert_eq!(merge, LineMerge { merges: 2, score: 32 });
    }

    #[test]
    fn test_merge_output_not_reconsidered() {
        // 4 is produced from the 2s and must not then merge with the next 4.
        let mut line = [2, 2, 4, 0];
        let merge = merge_line(&mut line, Edge::Leading);
        assert_eq!(line, [4, 0, 4, 0]);
        assert_eq!(merge.merges, 1);
    }

    #[test]
    fn test_merge_middle_pair() {
        let mut line = [4, 2, 2, 4];
        let merge = merge_line(&mut line, Edge::Leading);
        assert_eq!(line, [4, 4, 0, 4]);
        assert_eq!(merge.score, 4);
    }

    #[test]
    fn test_merge_nothing() {
        let mut line = [2, 4, 2, 4];
        let merge = merge_line(&mut line, Edge::Leading);
        assert_eq!(line, [2, 4, 2, 4]);
        assert!(!merge.merged());
        assert_eq!(merge.score, 0);

        let mut empty = [0; 4];
        assert!(!merge_line(&mut empty, Edge::Trailing).merged());
    }
}

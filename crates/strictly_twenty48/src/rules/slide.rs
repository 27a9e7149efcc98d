//! Sliding and merging a single line.

use tracing::instrument;

use crate::types::is_mergeable;

/// Result of sliding one line toward its leading edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSlide {
    /// New line contents, leading edge first, padded to the input length.
    pub cells: Vec<u32>,
    /// Sum of all merged tile values.
    pub score: u64,
    /// Number of merges performed.
    pub merges: usize,
}

impl LineSlide {
    /// Returns true if the slide changed any cell of `before`.
    pub fn changed(&self, before: &[u32]) -> bool {
        self.cells.as_slice() != before
    }
}

/// Slides a line whose index 0 is the edge tiles move toward.
///
/// Empty cells are dropped, then a single scan from the leading edge
/// merges each equal pair once. A merged tile never merges again in the
/// same slide, so `[2, 2, 2]` becomes `[4, 2, 0]`. Tiles at
/// [`MAX_TILE`](crate::MAX_TILE) stay put. The result is padded with
/// trailing zeros.
#[instrument(level = "trace")]
pub fn slide_line(line: &[u32]) -> LineSlide {
    let tiles: Vec<u32> = line.iter().copied().filter(|v| *v != 0).collect();

    let mut cells = Vec::with_capacity(line.len());
    let mut score = 0;
    let mut merges = 0;
    let mut i = 0;
    while i < tiles.len() {
        match tiles.get(i + 1) {
            Some(next) if *next == tiles[i] && is_mergeable(tiles[i]) => {
                let merged = tiles[i] * 2;
                cells.push(merged);
                score += u64::from(merged);
                merges += 1;
                i += 2;
            }
            _ => {
                cells.push(tiles[i]);
                i += 1;
            }
        }
    }
    cells.resize(line.len(), 0);

    LineSlide {
        cells,
        score,
        merges,
    }
}

use std::fmt;

use rand::Rng;
use rand::seq::index;

use crate::caption::CaptionPlacer;
use crate::pool::WordPool;
use crate::words::WOW;

/// One in this many captions is forced to a standalone "wow".
const STANDALONE_ODDS: u32 = 20;

/// Geometry and switches for a single render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub width: usize,
    pub height: usize,
    /// Percentage of rows that get a caption, 0 to 100.
    pub density: f64,
    /// Color output.
    pub pretty: bool,
    pub no_art: bool,
}

/// Terminal rows for one pass: blank filler on top, art at the bottom.
///
/// The number of rows is fixed at construction; rendering only swaps out the
/// contents of individual rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    lines: Vec<String>,
}

impl Canvas {
    /// Build a canvas of `height` rows with `art` anchored to the bottom. Art
    /// taller than the canvas keeps its bottom rows.
    pub fn new(height: usize, art: &[String]) -> Self {
        let art = &art[art.len().saturating_sub(height)..];
        let mut lines = vec!["\n".to_string(); height - art.len()];
        lines.extend(art.iter().cloned());
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lines.iter().try_for_each(|line| f.write_str(line))
    }
}

/// Pick `floor(len * density / 100)` distinct rows, ascending.
pub fn affected_rows<R: Rng + ?Sized>(rng: &mut R, len: usize, density: f64) -> Vec<usize> {
    let amount = ((len as f64 * density / 100.0).floor() as usize).min(len);
    let mut rows = index::sample(rng, len, amount).into_vec();
    rows.sort_unstable();
    rows
}

/// Caption a random selection of canvas rows and return the rows touched.
///
/// The first and last selected rows, and about one in twenty of the others,
/// get a standalone "wow". The rest draw a word from `words`.
pub fn render<R: Rng + ?Sized>(
    rng: &mut R,
    canvas: &mut Canvas,
    config: &LayoutConfig,
    words: &mut WordPool<String>,
    placer: &mut CaptionPlacer,
) -> Vec<usize> {
    debug_assert_eq!(canvas.len(), config.height, "canvas height mismatch");
    debug_assert!(
        !config.no_art || canvas.lines.iter().all(|line| line == "\n"),
        "art on a canvas that should have none"
    );
    if config.density <= 0.0 {
        return Vec::new();
    }

    let affected = affected_rows(rng, canvas.len(), config.density);
    log::debug!(
        "captioning {} of {} rows at {}% density{}",
        affected.len(),
        canvas.len(),
        config.density,
        if config.no_art { ", no shibe" } else { "" }
    );

    let count = affected.len();
    for (rank, &row) in affected.iter().enumerate().map(|(i, row)| (i + 1, row)) {
        let occupied = canvas.lines[row].replace('\n', " ");

        let mut word = words.get(rng);
        if rank == 1 || rank == count || rng.gen_ratio(1, STANDALONE_ODDS) {
            word = WOW.to_string();
        }

        canvas.lines[row] = placer.place(rng, &occupied, &word, config.width, config.pretty);
    }

    affected
}

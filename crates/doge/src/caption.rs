use rand::Rng;

use crate::pool::UniformPool;
use crate::width::{onscreen_width, visible_width};
use crate::words::{COLORS, PREFIXES, SUFFIXES, WOW};

/// One in this many non-standalone captions gets a suffix.
const SUFFIX_ODDS: u32 = 15;

/// Builds a single captioned row: random prefix, the occasional suffix, a
/// random left margin and, on color terminals, a random color.
#[derive(Debug, Clone)]
pub struct CaptionPlacer {
    prefixes: UniformPool<String>,
    suffixes: UniformPool<String>,
    colors: UniformPool<u8>,
}

impl CaptionPlacer {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_pools(
            UniformPool::new(PREFIXES.iter().map(|p| p.to_string()), WOW.to_string(), rng),
            UniformPool::new(SUFFIXES.iter().map(|s| s.to_string()), WOW.to_string(), rng),
            UniformPool::new(COLORS, 15, rng),
        )
    }

    pub fn with_pools(
        prefixes: UniformPool<String>,
        suffixes: UniformPool<String>,
        colors: UniformPool<u8>,
    ) -> Self {
        Self {
            prefixes,
            suffixes,
            colors,
        }
    }

    /// Append a caption for `word` to the `occupied` part of a row.
    ///
    /// The returned row always ends in a line break and never spans more than
    /// `tty_width` visible columns. When the caption cannot fit, the caption
    /// is dropped and only the occupied text is kept.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        occupied: &str,
        word: &str,
        tty_width: usize,
        pretty: bool,
    ) -> String {
        let mut message = if word == WOW {
            WOW.to_string()
        } else {
            let mut message = format!("{} {}", self.prefixes.get(rng), word);
            if rng.gen_ratio(1, SUFFIX_ODDS) {
                message.push(' ');
                message.push_str(&self.suffixes.get(rng));
            }
            message
        };

        let interval =
            tty_width as i64 - onscreen_width(&message) as i64 - visible_width(occupied) as i64;
        if interval < 1 {
            log::trace!("caption '{message}' does not fit in {tty_width} columns, dropped");
            return format!("{occupied}\n");
        }

        let spacer = rng.gen_range(0..interval as usize);
        message.insert_str(0, &" ".repeat(spacer));

        if pretty {
            message = format!(
                "\x1b[1m\x1b[38;5;{}m{message}\x1b[39m\x1b[0m",
                self.colors.get(rng)
            );
        }

        format!("{occupied}{message}\n")
    }
}

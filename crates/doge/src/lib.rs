//! Wow print shibe to terminal, such random words.

pub mod art;
pub mod caption;
pub mod error;
pub mod layout;
pub mod pool;
pub mod season;
pub mod shibe;
pub mod source;
pub mod tty;
pub mod width;
pub mod words;

use std::io::Write;

pub use error::DogeError;
pub use layout::Canvas;
pub use shibe::{Options, SeasonChoice, Shibe};
pub use tty::Tty;

/// Write every canvas row to `out` as-is.
pub fn print_doge<W: Write>(canvas: &Canvas, mut out: W) -> Result<(), DogeError> {
    for line in canvas.lines() {
        out.write_all(line.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

use std::fs;
use std::path::Path;

use crate::error::DogeError;
use crate::width::visible_width;

pub const DEFAULT_ART: &str = "doge.txt";

/// Columns kept free next to the widest art row for captions.
pub const CAPTION_MARGIN: usize = 15;

macro_rules! embed {
    ($name:literal) => {
        ($name, include_str!(concat!("../static/", $name)))
    };
}

/// Shibe pictures shipped with the binary, by file name.
pub static EMBEDDED: [(&str, &str); 9] = [
    embed!("doge.txt"),
    embed!("doge-earth.txt"),
    embed!("doge-easter.txt"),
    embed!("doge-halloween.txt"),
    embed!("doge-kabosu.txt"),
    embed!("doge-moon.txt"),
    embed!("doge-thanksgiving.txt"),
    embed!("doge-valentine.txt"),
    embed!("doge-xmas.txt"),
];

pub fn embedded(name: &str) -> Option<&'static str> {
    EMBEDDED
        .iter()
        .find(|(embedded_name, _)| *embedded_name == name)
        .map(|(_, art)| *art)
}

/// Load art by embedded name, falling back to reading `name` as a path.
pub fn load(name: &str) -> Result<Vec<String>, DogeError> {
    if let Some(art) = embedded(name) {
        return Ok(split_lines(art));
    }

    log::debug!("'{name}' is not an embedded shibe, reading it from disk");
    fs::read_to_string(Path::new(name))
        .map(|art| split_lines(&art))
        .map_err(|source| DogeError::UnknownArt {
            name: name.to_string(),
            source,
        })
}

/// Stand-in for suppressed art: a single empty row.
pub fn suppressed() -> Vec<String> {
    vec!["\n".to_string()]
}

/// Split into rows, keeping each row's line break.
pub fn split_lines(art: &str) -> Vec<String> {
    art.split_inclusive('\n').map(str::to_string).collect()
}

/// Narrowest terminal that fits `art` with room left for captions.
pub fn min_width(art: &[String]) -> usize {
    art.iter()
        .map(|line| visible_width(line.trim_end_matches('\n')))
        .max()
        .unwrap_or(0)
        + CAPTION_MARGIN
}

use std::borrow::Cow;
use std::cmp::Ordering;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SGR_SEQUENCE: Regex = Regex::new(r"\x1b\[[0-9;]*m").expect("valid SGR pattern");
}

/// Code point ranges whose East_Asian_Width is W or F, sorted and disjoint.
/// Unassigned code points inside the CJK and emoji blocks default to W.
const WIDE: &[(u32, u32)] = &[
    (0x1100, 0x115f),
    (0x231a, 0x231b),
    (0x2329, 0x232a),
    (0x23e9, 0x23ec),
    (0x23f0, 0x23f0),
    (0x23f3, 0x23f3),
    (0x25fd, 0x25fe),
    (0x2614, 0x2615),
    (0x2648, 0x2653),
    (0x267f, 0x267f),
    (0x2693, 0x2693),
    (0x26a1, 0x26a1),
    (0x26aa, 0x26ab),
    (0x26bd, 0x26be),
    (0x26c4, 0x26c5),
    (0x26ce, 0x26ce),
    (0x26d4, 0x26d4),
    (0x26ea, 0x26ea),
    (0x26f2, 0x26f3),
    (0x26f5, 0x26f5),
    (0x26fa, 0x26fa),
    (0x26fd, 0x26fd),
    (0x2705, 0x2705),
    (0x270a, 0x270b),
    (0x2728, 0x2728),
    (0x274c, 0x274c),
    (0x274e, 0x274e),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2795, 0x2797),
    (0x27b0, 0x27b0),
    (0x27bf, 0x27bf),
    (0x2b1b, 0x2b1c),
    (0x2b50, 0x2b50),
    (0x2b55, 0x2b55),
    (0x2e80, 0x303e),
    (0x3041, 0x3247),
    (0x3250, 0x4dbf),
    (0x4e00, 0xa4c6),
    (0xa960, 0xa97c),
    (0xac00, 0xd7a3),
    (0xf900, 0xfaff),
    (0xfe10, 0xfe19),
    (0xfe30, 0xfe6b),
    (0xff01, 0xff60),
    (0xffe0, 0xffe6),
    (0x16fe0, 0x18d08),
    (0x1aff0, 0x1b2fb),
    (0x1f004, 0x1f004),
    (0x1f0cf, 0x1f0cf),
    (0x1f18e, 0x1f18e),
    (0x1f191, 0x1f19a),
    (0x1f200, 0x1f265),
    (0x1f300, 0x1f320),
    (0x1f32d, 0x1f335),
    (0x1f337, 0x1f37c),
    (0x1f37e, 0x1f393),
    (0x1f3a0, 0x1f3ca),
    (0x1f3cf, 0x1f3d3),
    (0x1f3e0, 0x1f3f0),
    (0x1f3f4, 0x1f3f4),
    (0x1f3f8, 0x1f43e),
    (0x1f440, 0x1f440),
    (0x1f442, 0x1f4fc),
    (0x1f4ff, 0x1f53d),
    (0x1f54b, 0x1f54e),
    (0x1f550, 0x1f567),
    (0x1f57a, 0x1f57a),
    (0x1f595, 0x1f596),
    (0x1f5a4, 0x1f5a4),
    (0x1f5fb, 0x1f64f),
    (0x1f680, 0x1f6c5),
    (0x1f6cc, 0x1f6cc),
    (0x1f6d0, 0x1f6d2),
    (0x1f6d5, 0x1f6df),
    (0x1f6eb, 0x1f6ec),
    (0x1f6f4, 0x1f6fc),
    (0x1f7e0, 0x1f7f0),
    (0x1f90c, 0x1f93a),
    (0x1f93c, 0x1f945),
    (0x1f947, 0x1f9ff),
    (0x1fa70, 0x1faf6),
    (0x20000, 0x3fffd),
];

/// Remove ANSI SGR color sequences, leaving anything malformed in place.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    SGR_SEQUENCE.replace_all(s, "")
}

/// Whether `c` is East-Asian wide or fullwidth.
pub fn is_wide(c: char) -> bool {
    let c = c as u32;
    WIDE.binary_search_by(|&(start, end)| {
        if end < c {
            Ordering::Less
        } else if start > c {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
    .is_ok()
}

/// Columns taken on screen by `s` as-is, counting East-Asian wide and
/// fullwidth code points as two columns and everything else as one.
pub fn onscreen_width(s: &str) -> usize {
    s.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

/// Visible width of `s` once its color codes are removed.
pub fn visible_width(s: &str) -> usize {
    onscreen_width(&strip_ansi(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_zero() {
        assert_eq!(visible_width(""), 0);
        assert_eq!(onscreen_width(""), 0);
    }

    #[test]
    fn color_codes_do_not_count() {
        let plain = "such terminal";
        let colored = format!("\x1b[1m\x1b[38;5;208m{plain}\x1b[39m\x1b[0m");
        assert_eq!(visible_width(plain), visible_width(&colored));
        assert_eq!(visible_width(&colored), 13);
    }

    #[test]
    fn wide_code_points_count_double() {
        assert_eq!(visible_width("犬abc"), 2 + 3);
        assert_eq!(visible_width("ＷＯＷ"), 6);
        assert_eq!(visible_width("påsk"), 4);
    }

    #[test]
    fn wide_combining_marks_count_double() {
        assert_eq!(visible_width("\u{302A}ab"), 4);
        for c in ['\u{302F}', '\u{3099}', '\u{309A}', '\u{3164}', '\u{16FE4}'] {
            assert_eq!(onscreen_width(&c.to_string()), 2, "U+{:04X}", c as u32);
        }
    }

    #[test]
    fn neutral_code_points_count_once() {
        // KHMER INDEPENDENT VOWEL QUU is neutral, however wide it renders.
        assert_eq!(visible_width("\u{17A4}"), 1);
        assert_eq!(visible_width("\u{0301}"), 1);
        assert_eq!(visible_width("\u{00E9}\u{2026}"), 2);
    }

    #[test]
    fn wide_table_is_sorted_and_disjoint() {
        for pair in WIDE.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0, "{:x?}", pair);
        }
        assert!(is_wide('\u{1100}'));
        assert!(!is_wide('\u{1160}'));
        assert!(is_wide('\u{1F600}'));
        assert!(is_wide('\u{20000}'));
    }

    #[test]
    fn malformed_escapes_are_measured_not_dropped() {
        // Unterminated sequence: nothing matches, every char counts.
        assert_eq!(visible_width("\x1b[38;5"), 6);
        assert_eq!(strip_ansi("\x1b[1mwow\x1b[3").as_ref(), "wow\x1b[3");
    }

    #[test]
    fn line_breaks_count_as_one_column() {
        assert_eq!(onscreen_width("wow\n"), 4);
    }
}

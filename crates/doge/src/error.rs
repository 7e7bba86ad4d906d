use std::io;

use thiserror::Error;

/// Everything that can stop a shibe from being shown.
#[derive(Error, Debug)]
pub enum DogeError {
    #[error("wow, density such over 100%, too high")]
    DensityTooHigh,

    #[error("wow, density such negative, too low")]
    DensityTooLow,

    #[error("wow, such small terminal\nno doge under {min_width} column")]
    TerminalTooSmall { min_width: usize },

    #[error("wow, such unknown shibe '{name}': {source}")]
    UnknownArt {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("wow, such broken input encoding: {0}")]
    Encoding(#[source] io::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DogeError {
    /// Usage and layout problems share the plain failure status; encoding
    /// failures get their own, see [`locale_exit_code`].
    pub fn exit_code(&self) -> u8 {
        match self {
            DogeError::DensityTooHigh
            | DogeError::DensityTooLow
            | DogeError::UnknownArt { .. }
            | DogeError::TerminalTooSmall { .. }
            | DogeError::Io(_) => 1,
            DogeError::Encoding(_) => locale_exit_code(&locale()).0,
        }
    }

    pub fn is_encoding(&self) -> bool {
        matches!(self, DogeError::Encoding(_))
    }
}

/// The active locale, as the C library would pick it.
pub fn locale() -> String {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// Exit status and advice for an encoding failure under `locale`.
pub fn locale_exit_code(locale: &str) -> (u8, String) {
    if locale.is_empty() {
        return (3, "wow error: broken $LANG, so fail".to_string());
    }

    let lowered = locale.to_lowercase();
    if !(lowered.ends_with("utf-8") || lowered.ends_with("utf8")) {
        return (
            2,
            format!(
                "wow error: locale '{locale}' is not UTF-8.  doge needs UTF-8 to print Shibe. \
                 Please set your system to use a UTF-8 locale."
            ),
        );
    }

    (
        4,
        "wow error: Unknown unicode error.  Please include output from /usr/bin/locale \
         when reporting it."
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_with_one() {
        assert_eq!(DogeError::DensityTooHigh.exit_code(), 1);
        assert_eq!(DogeError::DensityTooLow.exit_code(), 1);
        assert_eq!(DogeError::TerminalTooSmall { min_width: 50 }.exit_code(), 1);
    }

    #[test]
    fn small_terminal_names_the_minimum_width() {
        let message = DogeError::TerminalTooSmall { min_width: 49 }.to_string();
        assert!(message.contains("such small terminal"));
        assert!(message.contains("no doge under 49 column"));
    }

    #[test]
    fn encoding_advice_depends_on_locale() {
        assert_eq!(locale_exit_code("").0, 3);
        let (code, advice) = locale_exit_code("C");
        assert_eq!(code, 2);
        assert!(advice.contains("'C' is not UTF-8"));
        assert_eq!(locale_exit_code("en_US.UTF-8").0, 4);
        assert_eq!(locale_exit_code("sv_SE.utf8").0, 4);
    }
}

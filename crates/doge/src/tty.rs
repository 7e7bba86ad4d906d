use std::io::IsTerminal as _;

const FALLBACK_WIDTH: usize = 80;
const FALLBACK_HEIGHT: usize = 24;

/// Terminal properties for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tty {
    pub width: usize,
    pub height: usize,
    /// Input is being piped in rather than typed.
    pub stdin_piped: bool,
    /// Output goes to a terminal that understands color.
    pub pretty: bool,
}

impl Tty {
    /// Probe the attached terminal. Without one, assume 80x24.
    pub fn probe() -> Self {
        let (width, height) = terminal_size::terminal_size()
            .map(|(width, height)| (width.0 as usize, height.0 as usize))
            .unwrap_or((FALLBACK_WIDTH, FALLBACK_HEIGHT));

        let tty = Self {
            width,
            height,
            stdin_piped: !std::io::stdin().is_terminal(),
            pretty: color_supported(std::io::stdout().is_terminal()),
        };
        log::trace!("probed terminal: {tty:?}");
        tty
    }

    /// Apply explicit size overrides. A probed height leaves room for the
    /// shell prompt that reappears after the shibe; an explicit height is
    /// used as-is.
    pub fn with_limits(mut self, max_width: Option<usize>, max_height: Option<usize>) -> Self {
        if let Some(width) = max_width {
            self.width = width;
        }
        self.height = match max_height {
            Some(height) => height,
            None => self
                .height
                .saturating_sub(prompt_lines(&std::env::var("PS1").unwrap_or_default())),
        };
        self
    }
}

/// Rows needed by the shell prompt plus the line it is typed on.
pub fn prompt_lines(ps1: &str) -> usize {
    ps1.split('\n').count() + 1
}

#[cfg(not(windows))]
fn color_supported(stdout_is_tty: bool) -> bool {
    stdout_is_tty
}

#[cfg(windows)]
fn color_supported(_stdout_is_tty: bool) -> bool {
    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    std::env::var_os("WT_SESSION").is_some()
        || colorterm == "truecolor"
        || colorterm == "24bit"
        || std::env::var("TERM").is_ok_and(|term| term == "xterm")
}

use std::io::Read;

use chrono::NaiveDate;
use rand::Rng;

use crate::art;
use crate::caption::CaptionPlacer;
use crate::error::DogeError;
use crate::layout::{self, Canvas, LayoutConfig};
use crate::pool::{FrequencyPool, UniformPool, WordPool};
use crate::season::{self, Season};
use crate::source;
use crate::tty::Tty;
use crate::words::{STOPWORDS, WORD_LIST, WOW};

pub const MAX_DENSITY: f64 = 100.0;
pub const DEFAULT_DENSITY: f64 = 30.0;

/// Which seasonal decorations to use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeasonChoice {
    /// Whatever season today falls in.
    #[default]
    Auto,
    /// No seasons at all.
    Off,
    Forced(&'static Season),
}

impl SeasonChoice {
    /// `"none"` turns seasons off; anything else must be a season key.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "none" => Some(SeasonChoice::Off),
            key => season::lookup(key).map(SeasonChoice::Forced),
        }
    }
}

/// Options for one run, as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub density: f64,
    pub frequency: bool,
    pub step: usize,
    pub filter_stopwords: bool,
    pub min_length: usize,
    /// Alternate art, by embedded name or path.
    pub shibe: Option<String>,
    pub no_shibe: bool,
    pub season: SeasonChoice,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            frequency: false,
            step: FrequencyPool::<String>::DEFAULT_STEP,
            filter_stopwords: false,
            min_length: 1,
            shibe: None,
            no_shibe: false,
            season: SeasonChoice::Auto,
        }
    }
}

/// Everything needed to lay out one shibe.
pub struct Shibe {
    options: Options,
    tty: Tty,
    words: WordPool<String>,
    art_name: String,
}

impl Shibe {
    pub fn new<R: Rng + ?Sized>(options: Options, tty: Tty, rng: &mut R) -> Self {
        let defaults = WORD_LIST.iter().map(|word| word.to_string());
        let words = if options.frequency {
            // such frequency based
            WordPool::Frequency(FrequencyPool::new(defaults, options.step, WOW.to_string()))
        } else {
            WordPool::Uniform(UniformPool::new(defaults, WOW.to_string(), rng))
        };
        let art_name = options
            .shibe
            .clone()
            .unwrap_or_else(|| art::DEFAULT_ART.to_string());

        Self {
            options,
            tty,
            words,
            art_name,
        }
    }

    /// Check options, pick the season and gather words, then lay the canvas
    /// out. `input` is read for words when stdin is piped.
    pub fn render<R, I>(
        mut self,
        rng: &mut R,
        today: NaiveDate,
        input: I,
    ) -> Result<Canvas, DogeError>
    where
        R: Rng + ?Sized,
        I: Read,
    {
        self.check_density()?;

        if let Some(season) = self.season(today) {
            log::debug!("wow, much {} season", season.key);
            self.art_name = season.art.to_string();
            let words = season.words.iter().map(|word| word.to_string());
            self.words.extend(words, rng);
        }

        let art = if !self.tty.pretty {
            // Output is piped somewhere, no shibe.
            Vec::new()
        } else if self.options.no_shibe {
            art::suppressed()
        } else {
            art::load(&self.art_name)?
        };

        let min_width = art::min_width(&art);
        if self.tty.width < min_width {
            return Err(DogeError::TerminalTooSmall { min_width });
        }

        let mut canvas = Canvas::new(self.tty.height, &art);

        if self.tty.stdin_piped {
            self.use_input(input, rng)?;
        } else {
            let words = source::system_words(rng);
            self.words.extend(words, rng);
        }

        let config = LayoutConfig {
            width: self.tty.width,
            height: self.tty.height,
            density: self.options.density,
            pretty: self.tty.pretty,
            no_art: self.options.no_shibe,
        };
        let mut placer = CaptionPlacer::new(rng);
        layout::render(rng, &mut canvas, &config, &mut self.words, &mut placer);

        Ok(canvas)
    }

    fn check_density(&self) -> Result<(), DogeError> {
        if self.options.density > MAX_DENSITY {
            return Err(DogeError::DensityTooHigh);
        }
        if self.options.density < 0.0 || self.options.density.is_nan() {
            return Err(DogeError::DensityTooLow);
        }
        Ok(())
    }

    /// A forced season always applies. Otherwise seasons only kick in when
    /// the default shibe is on screen.
    fn season(&self, today: NaiveDate) -> Option<&'static Season> {
        match self.options.season {
            SeasonChoice::Off => None,
            SeasonChoice::Forced(season) => Some(season),
            SeasonChoice::Auto if self.options.shibe.is_some() || self.options.no_shibe => None,
            SeasonChoice::Auto => season::season_for(today),
        }
    }

    /// Piped words replace everything else in the pool.
    fn use_input<R, I>(&mut self, input: I, rng: &mut R) -> Result<(), DogeError>
    where
        R: Rng + ?Sized,
        I: Read,
    {
        let text = source::read_input(input)?;
        let mut words = source::tokenize(&text);
        if self.options.filter_stopwords {
            words = source::filter_words(words, &STOPWORDS, self.options.min_length);
        }
        log::debug!("using {} words from stdin", words.len());

        self.words.clear();
        self.words.extend(words, rng);
        Ok(())
    }
}

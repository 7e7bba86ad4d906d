//! Seasonal greetings by shibe.
//!
//! A season is active when today falls between its start and end dates,
//! inclusive. The year is discarded for fixed seasons, so a range may span
//! New Year's day. Some holidays move around the calendar and are computed
//! per year instead. When several seasons match, the first one in [`SEASONS`]
//! wins.

use chrono::{Datelike as _, Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonDates {
    /// `(month, day)` pairs, inclusive.
    Fixed { start: (u32, u32), end: (u32, u32) },
    /// Palm Sunday to Easter Monday.
    Easter,
    /// A few days around the Mid-Autumn festival.
    MidAutumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season {
    pub key: &'static str,
    pub dates: SeasonDates,
    /// Name of the embedded art shown during the season.
    pub art: &'static str,
    pub words: &'static [&'static str],
}

pub static SEASONS: [Season; 8] = [
    Season {
        key: "valentine",
        dates: SeasonDates::Fixed {
            start: (2, 10),
            end: (2, 14),
        },
        art: "doge-valentine.txt",
        words: &[
            "valentine",
            "love",
            "hearts",
            "roses",
            "chocolates",
            "date",
            "romance",
            "cupid",
            "crush",
            "kisses",
        ],
    },
    Season {
        key: "halloween",
        dates: SeasonDates::Fixed {
            start: (10, 17),
            end: (10, 31),
        },
        art: "doge-halloween.txt",
        words: &[
            "halloween",
            "scary",
            "ghosts",
            "boo",
            "candy",
            "tricks or treats",
            "trick",
            "treat",
            "costume",
            "dark",
            "night",
        ],
    },
    Season {
        key: "thanksgiving",
        dates: SeasonDates::Fixed {
            start: (11, 15),
            end: (11, 28),
        },
        art: "doge-thanksgiving.txt",
        words: &[
            "thanksgiving",
            "thanks",
            "pilgrim",
            "turkeys",
            "stuffings",
            "cranberry",
            "meshed potatoes",
        ],
    },
    Season {
        key: "xmas",
        dates: SeasonDates::Fixed {
            start: (12, 14),
            end: (12, 26),
        },
        art: "doge-xmas.txt",
        words: &[
            "christmas",
            "xmas",
            "candles",
            "santa",
            "merry",
            "reindeers",
            "gifts",
            "jul",
            "vacation",
            "carol",
        ],
    },
    Season {
        key: "easter",
        dates: SeasonDates::Easter,
        art: "doge-easter.txt",
        words: &[
            "easter",
            "bunni",
            "playdoge bunni",
            "pascha",
            "passover",
            "påsk",
            "life=100",
            "fastings",
            "eggs",
            "lamb",
            "candy",
            "easter bunni",
            "easter eggs",
        ],
    },
    Season {
        key: "earth",
        dates: SeasonDates::Fixed {
            start: (4, 22),
            end: (4, 22),
        },
        art: "doge-earth.txt",
        words: &[
            "earth",
            "planet",
            "trees",
            "recycle",
            "ocean",
            "green",
            "nature",
            "climate",
            "solar",
        ],
    },
    Season {
        key: "kabosu",
        dates: SeasonDates::Fixed {
            start: (11, 2),
            end: (11, 2),
        },
        art: "doge-kabosu.txt",
        words: &[
            "kabosu",
            "birthday",
            "good girl",
            "original",
            "legend",
            "cake",
            "smile",
            "sakura",
        ],
    },
    Season {
        key: "moon",
        dates: SeasonDates::MidAutumn,
        art: "doge-moon.txt",
        words: &[
            "moon",
            "mooncake",
            "lantern",
            "full moon",
            "harvest",
            "rabbit",
            "tea",
            "reunion",
        ],
    },
];

/// Mid-Autumn festival dates (15th day of the 8th lunar month).
static MID_AUTUMN: [(i32, u32, u32); 7] = [
    (2024, 9, 17),
    (2025, 10, 6),
    (2026, 9, 25),
    (2027, 9, 15),
    (2028, 10, 3),
    (2029, 9, 22),
    (2030, 9, 12),
];

/// The season with the given key, if there is one.
pub fn lookup(key: &str) -> Option<&'static Season> {
    SEASONS.iter().find(|season| season.key == key)
}

/// All season keys, in precedence order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    SEASONS.iter().map(|season| season.key)
}

/// The season active on `today`, if any.
pub fn season_for(today: NaiveDate) -> Option<&'static Season> {
    SEASONS.iter().find(|season| season.contains(today))
}

impl Season {
    pub fn contains(&self, day: NaiveDate) -> bool {
        match self.dates {
            SeasonDates::Fixed { start, end } => {
                let today = (day.month(), day.day());
                if start <= end {
                    start <= today && today <= end
                } else {
                    start <= today || today <= end
                }
            }
            SeasonDates::Easter => {
                let sunday = easter_sunday(day.year());
                sunday.is_some_and(|sunday| within(day, sunday, Days::new(7), Days::new(1)))
            }
            SeasonDates::MidAutumn => {
                let festival = mid_autumn(day.year());
                festival.is_some_and(|festival| within(day, festival, Days::new(3), Days::new(1)))
            }
        }
    }
}

/// Whether `day` lies between `before` days ahead of `anchor` and `after`
/// days past it.
fn within(day: NaiveDate, anchor: NaiveDate, before: Days, after: Days) -> bool {
    let start = anchor.checked_sub_days(before);
    let end = anchor.checked_add_days(after);
    match (start, end) {
        (Some(start), Some(end)) => start <= day && day <= end,
        _ => false,
    }
}

/// Western Easter Sunday for `year`, by the anonymous Gregorian algorithm.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn mid_autumn(year: i32) -> Option<NaiveDate> {
    MID_AUTUMN
        .iter()
        .find(|(y, _, _)| *y == year)
        .and_then(|&(y, month, day)| NaiveDate::from_ymd_opt(y, month, day))
}

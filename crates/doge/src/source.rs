//! Where caption words come from when they are not the built-in list.
//!
//! Each system source is tried on its own and simply contributes nothing when
//! it fails; a missing home directory or `ps` binary never stops the shibe.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io::{self, Read};
use std::process::Command;

use lazy_static::lazy_static;
use rand::Rng;
use rand::seq::SliceRandom as _;
use regex::Regex;

use crate::error::DogeError;

/// Shortest process name worth showing.
const MIN_PROCESS_LEN: usize = 2;

/// How many running processes make it into the word pool.
const MAX_PROCESSES: usize = 2;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+(?:'\w+)*").expect("valid word pattern");
}

/// Words matched in lowercased `text`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Drop words shorter than `min_length` characters and known stopwords.
pub fn filter_words(
    words: Vec<String>,
    stopwords: &HashSet<&str>,
    min_length: usize,
) -> Vec<String> {
    words
        .into_iter()
        .filter(|word| word.chars().count() >= min_length && !stopwords.contains(word.as_str()))
        .collect()
}

/// Read all of `input` as text. Anything that is not UTF-8 is an encoding
/// failure rather than a plain I/O error.
pub fn read_input<R: Read>(mut input: R) -> Result<String, DogeError> {
    let mut text = String::new();
    match input.read_to_string(&mut text) {
        Ok(_) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(DogeError::Encoding(e)),
        Err(e) => Err(DogeError::Io(e)),
    }
}

/// Lowercased words describing the machine and the person at it.
pub fn system_words<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let mut words = Vec::new();

    words.extend(username());
    words.extend(editor(&std::env::var("EDITOR").unwrap_or_default()));

    // OS, hostname and... architecture (because lel)
    words.push(std::env::consts::OS.to_string());
    words.extend(hostname());
    words.push(std::env::consts::ARCH.to_string());
    words.extend(os_release_id());

    words.extend(home_file(rng));
    words.extend(processes(rng).into_iter().take(MAX_PROCESSES));

    log::debug!("gathered {} words from the system", words.len());
    words.into_iter().map(|word| word.to_lowercase()).collect()
}

fn username() -> Option<String> {
    let name = match whoami::fallible::username() {
        Ok(name) => name,
        Err(e) => {
            log::debug!("could not look up the user name: {}", e);
            env_fallback(&["USER", "LOGNAME", "USERNAME"])?
        }
    };
    Some(name).filter(|name| !name.is_empty())
}

/// Basename of the editor program in an `$EDITOR` value such as
/// `/usr/bin/vim -u NONE`.
pub fn editor(value: &str) -> Option<String> {
    let program = value.split_whitespace().next()?;
    program
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Host name as reported by the operating system, like `uname -n`.
fn hostname() -> Option<String> {
    let name = match whoami::fallible::hostname() {
        Ok(name) => name,
        Err(e) => {
            log::debug!("could not look up the host name: {}", e);
            env_fallback(&["HOSTNAME", "COMPUTERNAME"])?
        }
    };
    Some(name.trim().to_string()).filter(|name| !name.is_empty())
}

fn env_fallback(vars: &[&str]) -> Option<String> {
    vars.iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
}

fn os_release_id() -> Option<String> {
    ["/etc/os-release", "/usr/lib/os-release"]
        .iter()
        .find_map(|path| fs::read_to_string(path).ok())
        .and_then(|release| parse_os_release_id(&release))
}

/// The `ID` entry of an os-release file.
pub fn parse_os_release_id(release: &str) -> Option<String> {
    release
        .lines()
        .find_map(|line| line.strip_prefix("ID="))
        .map(|id| id.trim().trim_matches(['"', '\'']).to_string())
        .filter(|id| !id.is_empty())
}

fn home_file<R: Rng + ?Sized>(rng: &mut R) -> Option<String> {
    let home = dirs::home_dir()?;
    let entries = match fs::read_dir(&home) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("could not list {}: {}", home.display(), e);
            return None;
        }
    };
    let names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.choose(rng).cloned()
}

/// Shuffled names of the currently running processes.
fn processes<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let output = match Command::new("ps").args(["-A", "-o", "comm="]).output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            log::debug!("ps exited with {}", output.status);
            return Vec::new();
        }
        Err(e) => {
            log::debug!("could not run ps: {}", e);
            return Vec::new();
        }
    };

    let mut names: Vec<String> = process_names(&String::from_utf8_lossy(&output.stdout))
        .into_iter()
        .collect();
    names.shuffle(rng);
    names
}

/// Distinct, presentable process names from `ps -o comm=` output.
pub fn process_names(ps_output: &str) -> BTreeSet<String> {
    ps_output
        .lines()
        .filter_map(|comm| comm.trim().rsplit('/').next())
        .filter(|name| name.chars().count() >= MIN_PROCESS_LEN && !name.contains(':'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    use super::*;
    use crate::words::STOPWORDS;

    #[test]
    fn tokenize_lowercases_and_keeps_contractions() {
        assert_eq!(
            tokenize("Such DOGE, don't panic!\nwow-wow 42"),
            vec!["such", "doge", "don't", "panic", "wow", "wow", "42"]
        );
        assert!(tokenize("  \n").is_empty());
    }

    #[test]
    fn tokenize_handles_unicode_words() {
        assert_eq!(tokenize("Påsk 犬"), vec!["påsk", "犬"]);
    }

    #[test]
    fn filter_drops_stopwords_and_short_words() {
        let words = tokenize("the a an doge is very terminal ok");
        assert_eq!(
            filter_words(words.clone(), &STOPWORDS, 1),
            vec!["doge", "terminal"]
        );
        assert_eq!(filter_words(words, &STOPWORDS, 5), vec!["terminal"]);
        assert!(filter_words(tokenize("the a an"), &STOPWORDS, 1).is_empty());
    }

    #[test]
    fn editor_is_the_program_basename() {
        assert_eq!(editor("/usr/bin/vim -u NONE").as_deref(), Some("vim"));
        assert_eq!(editor("emacs").as_deref(), Some("emacs"));
        assert_eq!(editor(""), None);
        assert_eq!(editor("/usr/bin/"), None);
    }

    #[test]
    fn os_release_id_is_unquoted() {
        let release = "NAME=\"Arch Linux\"\nID=arch\nID_LIKE=\"\"\n";
        assert_eq!(parse_os_release_id(release).as_deref(), Some("arch"));
        let quoted = parse_os_release_id("ID=\"fedora\"\n");
        assert_eq!(quoted.as_deref(), Some("fedora"));
        assert_eq!(parse_os_release_id("NAME=x\n"), None);
    }

    #[test]
    fn process_names_are_filtered_and_deduplicated() {
        let ps_output = "/usr/bin/zsh\nzsh\nsh\nx\nkworker/0:1\n/sbin/init\n";
        let names: Vec<String> = process_names(ps_output).into_iter().collect();
        assert_eq!(names, vec!["init", "sh", "zsh"]);
    }

    #[test]
    fn invalid_utf8_input_is_an_encoding_error() {
        let err = read_input(&[0x77, 0x6f, 0xff, 0x77][..]).unwrap_err();
        assert!(err.is_encoding());
        assert_eq!(read_input("wow".as_bytes()).unwrap(), "wow");
    }

    #[test]
    fn hostname_comes_from_the_operating_system() {
        let name = hostname().expect("every test host has a name");
        assert!(!name.is_empty());
        assert_eq!(name, name.trim());

        let mut rng = StdRng::seed_from_u64(2);
        assert!(system_words(&mut rng).contains(&name.to_lowercase()));
    }

    #[test]
    fn system_words_are_lowercase() {
        let mut rng = StdRng::seed_from_u64(1);
        let words = system_words(&mut rng);
        assert!(words.iter().any(|w| w == std::env::consts::OS));
        assert!(words.iter().all(|w| *w == w.to_lowercase()));
    }
}

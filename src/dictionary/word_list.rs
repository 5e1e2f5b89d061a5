//! Plain-text word lists: one word per line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::WordListConfig;

/// Whether `word` can appear on the board at all.
pub fn is_playable_word(word: &str, config: &WordListConfig) -> bool {
    let len = word.chars().count();
    if len < config.min_len || len > config.max_len {
        return false;
    }
    !word.contains([' ', '-', '\'', '.'])
}

pub fn filter_words<'a, I>(words: I, config: &WordListConfig) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .map(str::trim)
        .filter(|word| is_playable_word(word, config))
        .map(str::to_string)
        .collect()
}

pub fn read_word_list(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    log::debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

pub fn write_word_list(path: &Path, words: &[String]) -> io::Result<()> {
    fs::write(path, words.join("\n"))
}

/// `words.txt` becomes `words_filtered.txt`; a path without extension gets the
/// suffix appended.
pub fn filtered_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_filtered.{}", ext.to_string_lossy()),
        None => format!("{stem}_filtered"),
    };
    path.with_file_name(name)
}

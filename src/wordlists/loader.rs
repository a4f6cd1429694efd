//! Word list loading utilities
//!
//! Word lists are flat text files with one word per line.

use crate::core::{Word, WordList};
use crate::error::LoadError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Parse the lines of one word list file
///
/// Lines are trimmed; blank lines are skipped silently and anything that is
/// not a 5-letter ASCII word is skipped with a debug log.
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!("skipping \"{line}\": {e}");
                None
            }
        })
        .collect()
}

/// Load words from a single file
///
/// # Errors
/// Returns `LoadError::Io` naming the file if it cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = words_from_lines(&content);
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load and concatenate several files into one deduplicated word list
///
/// File order is kept; a word repeated across files keeps its first position.
///
/// # Errors
/// - `LoadError::Io` if any file cannot be read
/// - `LoadError::NoWords` if the files contain no valid words
pub fn load_from_files<P: AsRef<Path>>(paths: &[P]) -> Result<WordList, LoadError> {
    let mut words = Vec::new();
    for path in paths {
        words.extend(load_from_file(path)?);
    }
    let list = WordList::new(words);
    if list.is_empty() {
        return Err(LoadError::NoWords);
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dont_wordle_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn lines_are_trimmed_and_filtered() {
        let words = words_from_lines("crane\n  SLATE  \n\nab\ntoolong\nsh0rt\ntrace\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "trace"]);
    }

    #[test]
    fn files_concatenate_and_dedupe() {
        let answers = temp_file("answers", "crane\nslate\n");
        let allowed = temp_file("allowed", "slate\ntrace\n");

        let list = load_from_files(&[&answers, &allowed]).unwrap();
        assert_eq!(list.texts(&list.all_indices()), vec!["crane", "slate", "trace"]);

        fs::remove_file(answers).unwrap();
        fs::remove_file(allowed).unwrap();
    }

    #[test]
    fn missing_file_names_the_path() {
        let missing = std::env::temp_dir().join("dont_wordle_definitely_missing.txt");
        let err = load_from_files(&[&missing]).unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("dont_wordle_definitely_missing.txt"));
    }

    #[test]
    fn files_without_words_are_an_error() {
        let empty = temp_file("empty", "\n\nnope\n");
        let err = load_from_files(&[&empty]).unwrap_err();
        assert!(matches!(err, LoadError::NoWords));
        fs::remove_file(empty).unwrap();
    }
}

//! Word list loading utilities
//!
//! Reads dictionaries from text files or the embedded list. Entries are kept
//! raw here; [`Dictionary::new`] does the normalising and length filtering.

use crate::core::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Read the non-blank lines of a word file
///
/// Lines starting with `#` are treated as comments.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use absurdle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(entries(&content))
}

/// Build a dictionary of `word_len`-letter words from a file, or the
/// embedded list when `path` is `None`
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_dictionary<P: AsRef<Path>>(path: Option<P>, word_len: usize) -> io::Result<Dictionary> {
    match path {
        Some(path) => Ok(Dictionary::new(load_from_file(path)?, word_len)),
        None => Ok(super::default_dictionary(word_len)),
    }
}

fn entries(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn entries_skip_blank_and_comment_lines() {
        let lines = entries("crane\n\n  # five letters\nslate\r\n   irate  \n");
        assert_eq!(lines, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn entries_keep_invalid_words_for_the_dictionary_to_drop() {
        let lines = entries("crane\ntoo long\nab1de\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(Dictionary::new(&lines, 5).len(), 1);
    }

    #[test]
    fn entries_empty() {
        assert!(entries("").is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("absurdle_words_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "abcd\nABCE\nwxyz\nabcdef").unwrap();
        }

        let dict = load_dictionary(Some(&path), 4).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dict.len(), 3);
        assert!(dict.id_of("abce").is_some());
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/absurdle/words.txt").is_err());
    }

    #[test]
    fn load_dictionary_defaults_to_embedded() {
        let dict = load_dictionary(None::<&Path>, 5).unwrap();
        assert_eq!(dict.len(), crate::wordlists::default_dictionary(5).len());
    }
}

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {}", .path.display(), .source)]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A provider of the word list fed to `Trie::populate`.
#[async_trait]
pub trait WordSource {
    async fn load(&self) -> Result<Vec<String>, DictionaryError>;
}

/// Reads words from a line-delimited dictionary file, one word per line,
/// e.g. `/usr/share/dict/words`.
#[derive(Debug)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl WordSource for FileWordSource {
    async fn load(&self) -> Result<Vec<String>, DictionaryError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DictionaryError::Unreadable {
                path: self.path.clone(),
                source: e,
            }
        })?;

        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        debug!("Loaded {} words from {}", words.len(), self.path.display());

        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn write_temp_dictionary(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        tokio::fs::write(&path, contents).await.unwrap();
        path
    }

    #[tokio::test]
    async fn loads_one_word_per_line() {
        let path =
            write_temp_dictionary("lexitrie_dict_basic.txt", "apple\nbanana\ncherry\n").await;

        let words = FileWordSource::new(&path).load().await.unwrap();
        assert_eq!(words, vec!["apple", "banana", "cherry"]);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn skips_blank_lines_and_trims() {
        let path =
            write_temp_dictionary("lexitrie_dict_blank.txt", "  apple  \n\n\nbanana\n   \n").await;

        let words = FileWordSource::new(&path).load().await.unwrap();
        assert_eq!(words, vec!["apple", "banana"]);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let source = FileWordSource::new("/definitely/not/a/dictionary");
        let err = source.load().await.unwrap_err();
        assert!(err.to_string().contains("/definitely/not/a/dictionary"));
    }
}

//! TOML-backed highscore persistence for the command-line adapter.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use reef_runner_system_scoreboard::{HighscoreStore, Ledger, StoreError};

/// Persists the ledger wholesale to a TOML file.
#[derive(Debug)]
pub(crate) struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl HighscoreStore for FileStore {
    fn load(&mut self) -> Result<Ledger, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => toml::from_str(&raw).map_err(|err| StoreError::Corrupt(err.to_string())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Ledger::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, ledger: &Ledger) -> Result<(), StoreError> {
        let raw = toml::to_string(ledger).map_err(|err| StoreError::Corrupt(err.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_an_empty_ledger() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::new(dir.path().join("scores.toml"));
        assert!(store.load().expect("load").top().is_empty());
    }

    #[test]
    fn ledger_round_trips_through_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::new(dir.path().join("scores.toml"));

        let ledger = Ledger::from_scores(vec![120, 45, 200]);
        store.save(&ledger).expect("save");
        assert_eq!(store.load().expect("load"), ledger);
    }

    #[test]
    fn corrupt_payloads_are_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scores.toml");
        fs::write(&path, "scores = \"not a list\"").expect("write");

        let mut store = FileStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }
}

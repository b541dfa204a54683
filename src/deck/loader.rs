use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use super::{Deck, DeckError};
use crate::assets::AssetCache;
use crate::config::{DeckConfig, IdPolicy};
use crate::model::WordEntry;

#[derive(Debug, Deserialize)]
struct DeckRow {
    english: String,
    spanish: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    id: Option<u32>,
}

/// Builds decks from CSV files with an `english,spanish[,image][,id]` header.
#[derive(Debug)]
pub struct DeckLoader {
    config: DeckConfig,
    assets: AssetCache,
}

impl DeckLoader {
    pub fn new(config: DeckConfig) -> Self {
        let assets = AssetCache::new(config.asset_root.clone());
        Self { config, assets }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn assets(&self) -> &AssetCache {
        &self.assets
    }

    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<Deck, DeckError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading deck");
        let file = File::open(path)?;
        self.load_reader(file)
    }

    pub fn load_reader<R: Read>(&mut self, reader: R) -> Result<Deck, DeckError> {
        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers = rdr.headers()?.clone();

        let mut deck = Deck::new();
        let mut skipped = 0usize;
        for record in rdr.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            match self.build_entry(&record, &headers, line, deck.len()) {
                Ok(entry) => deck.push(entry)?,
                Err(err @ DeckError::Validation { .. }) if self.config.skip_invalid => {
                    warn!(line, error = %err, "skipping deck row");
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        debug!(
            entries = deck.len(),
            skipped,
            images = self.assets.len(),
            "deck loaded"
        );
        Ok(deck)
    }

    fn build_entry(
        &mut self,
        record: &StringRecord,
        headers: &StringRecord,
        line: u64,
        index: usize,
    ) -> Result<WordEntry, DeckError> {
        let row: DeckRow = record.deserialize(Some(headers))?;
        if row.english.is_empty() {
            return Err(DeckError::Validation { line, field: "english" });
        }
        if row.spanish.is_empty() {
            return Err(DeckError::Validation { line, field: "spanish" });
        }

        let id = match self.config.ids {
            IdPolicy::Sequential { start } => u32::try_from(index)
                .ok()
                .and_then(|offset| start.checked_add(offset))
                .ok_or(DeckError::IdOverflow)?,
            IdPolicy::FromSource => row.id.ok_or(DeckError::MissingId { line })?,
        };

        let image = row
            .image
            .filter(|name| !name.is_empty())
            .map(|name| self.assets.get_or_insert(&name));

        let mut entry = WordEntry::new(row.english, row.spanish, image);
        entry.set_id(id);
        entry.set_english_local(self.config.locality.english_local(index));
        Ok(entry)
    }
}

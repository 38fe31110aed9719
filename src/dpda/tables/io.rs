// src/dpda/tables/io.rs
use std::{
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use super::{TransitionTable, rules::Rule, symbols::State};

// -------------------- JSON (de)serialization --------------------

#[serde_as]
#[derive(Serialize, Deserialize)]
struct TableDisk {
    #[serde_as(as = "DisplayFromStr")]
    initial: State,
    #[serde_as(as = "DisplayFromStr")]
    accepting: State,
    rules: Vec<Rule>,
}

impl From<&TransitionTable> for TableDisk {
    fn from(t: &TransitionTable) -> Self {
        Self {
            initial: t.initial(),
            accepting: t.accepting(),
            rules: t.rules().to_vec(),
        }
    }
}

impl TableDisk {
    fn into_table(self) -> Result<TransitionTable> {
        // a hand-edited file gets the same determinism check as the built-in table
        TransitionTable::new(self.initial, self.accepting, self.rules)
            .map_err(|e| anyhow!("table rejected: {e}"))
    }
}

pub fn table_to_json(t: &TransitionTable) -> Result<String> {
    serde_json::to_string_pretty(&TableDisk::from(t)).context("serialize transition table")
}

pub fn save_table_json(path: &Path, t: &TransitionTable) -> Result<()> {
    let f = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &TableDisk::from(t))?;
    w.flush()?;
    log::debug!("saved {} rules to {}", t.rules().len(), path.display());
    Ok(())
}

pub fn load_table_json_bytes(data: &[u8]) -> Result<TransitionTable> {
    serde_json::from_slice::<TableDisk>(data)
        .context("failed to parse transition table JSON")?
        .into_table()
}

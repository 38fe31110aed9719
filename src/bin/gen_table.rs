// src/bin/gen_table.rs
// Write the built-in aⁿbⁿ transition table to JSON.
// Usage:
//   cargo run --bin gen_table                # writes tables/anbn_table.json
//   cargo run --bin gen_table -- /path/out.json

use std::{env, fs, path::Path};

use anbn::dpda::tables::{TransitionTable, save_table_json};
use anyhow::{Context, Result};

fn main() -> Result<()> {
    let out = env::args()
        .nth(1)
        .unwrap_or_else(|| "tables/anbn_table.json".to_string());
    let out_path = Path::new(&out);

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }

    let t = TransitionTable::anbn()?;
    let expansions = t.rules().iter().filter(|r| r.production.is_some()).count();
    println!(
        "[gen_table] {} rules ({} grammar expansions), {} states",
        t.rules().len(),
        expansions,
        t.states().len()
    );

    save_table_json(out_path, t)?;
    println!("[gen_table] wrote {}", out_path.display());
    println!("         tip: FUZZ_TABLE={} cargo run --bin fuzz_anbn", out_path.display());
    Ok(())
}

// src/bin/fuzz_anbn.rs
// Generate random words, run the DPDA, compare against the counting oracle.
// Env:
//   - FUZZ_SEED=<u64>        rng seed (default 42)
//   - FUZZ_CASES=<usize>     number of words (default 10000)
//   - FUZZ_MAX_LEN=<usize>   max word length before '$' (default 64)
//   - FUZZ_TABLE=<path>      run a saved JSON table instead of the built-in one

use std::{env, fs, time::Instant};

use anbn::{
    dev::generator::{gen_word, is_anbn},
    dpda::{Engine, TraceTable, tables::TransitionTable, tables::load_table_json_bytes},
};
use anyhow::{Context, Result, bail};
use rand::{SeedableRng, rngs::StdRng};

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(default)
}

fn load_table() -> Result<TransitionTable> {
    match env::var("FUZZ_TABLE") {
        Ok(path) => {
            let data = fs::read(&path).with_context(|| format!("read {path}"))?;
            let t = load_table_json_bytes(&data).with_context(|| format!("load {path}"))?;
            println!("[fuzz] using table from {path} ({} rules)", t.rules().len());
            Ok(t)
        }
        Err(_) => Ok(TransitionTable::anbn()?.clone()),
    }
}

fn main() -> Result<()> {
    let seed = env_u64("FUZZ_SEED", 42);
    let cases = env_usize("FUZZ_CASES", 10_000);
    let max_len = env_usize("FUZZ_MAX_LEN", 64);

    let table = load_table()?;
    let mut engine = Engine::new(&table);
    let mut rng = StdRng::seed_from_u64(seed);

    let t0 = Instant::now();
    let (mut accepted, mut steps) = (0usize, 0usize);
    for i in 0..cases {
        let word = gen_word(&mut rng, max_len);
        let expect = is_anbn(&word);
        let (got, trace) = engine.run(&word)?;
        steps += trace.len();
        if got != expect {
            eprintln!("[fuzz] case {i} (seed {seed}): {word:?} dpda={got} oracle={expect}");
            eprint!("{}", TraceTable(trace));
            bail!("verdict mismatch on {word:?}");
        }
        accepted += usize::from(got);
    }

    let ms = t0.elapsed().as_secs_f64() * 1e3;
    println!(
        "[fuzz] ok: {cases} words (max_len {max_len}, seed {seed}), {accepted} accepted, {steps} steps in {ms:.3} ms"
    );
    Ok(())
}

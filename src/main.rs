// src/main.rs
// anbn [--all] [--json] [INPUT ...]
//
// Exit code: 0 when every input is accepted, 1 when any is rejected or
// malformed, 2 when there was nothing to run.

use std::{
    env,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use anyhow::Result;
use anbn::dpda::{Engine, TraceTable, trace::trace_to_json};

const DEMO_SUITE: &[&str] = &["$", "ab$", "aabb$", "aaabbb$", "aaaabbbb$", "aaaaaabbbbbb$"];

const USAGE: &str = "usage: anbn [--all] [--json] [INPUT ...]";

struct Args {
    all: bool,
    json: bool,
    inputs: Vec<String>,
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = Args {
        all: false,
        json: false,
        inputs: Vec::new(),
    };
    for a in env::args().skip(1) {
        match a.as_str() {
            "--all" => args.all = true,
            "--json" => args.json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                println!();
                println!("DPDA for L = {{ a^n b^n }} with one-symbol lookahead and end-marker '$'.");
                println!("  INPUT   words like ab$ or aabb$ ('$' is appended if missing)");
                println!("  --all   run the demo suite: {}", DEMO_SUITE.join(", "));
                println!("  --json  print traces as JSON instead of a table");
                return Ok(None);
            }
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag:?}\n{USAGE}"),
            _ => args.inputs.push(a),
        }
    }
    Ok(Some(args))
}

/// Interactive fallback; `None` means the user asked to quit.
fn prompt_inputs() -> Result<Option<Vec<String>>> {
    print!("Enter one or more inputs (comma-separated), or 'q' to quit: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let raw = line.trim();
    if matches!(raw.to_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(None);
    }
    Ok(Some(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    ))
}

fn run() -> Result<ExitCode> {
    let Some(mut args) = parse_args()? else {
        return Ok(ExitCode::SUCCESS);
    };

    if args.inputs.is_empty() && !args.all {
        match prompt_inputs()? {
            Some(inputs) => args.inputs = inputs,
            None => return Ok(ExitCode::SUCCESS),
        }
    }

    let suite: Vec<String> = if !args.inputs.is_empty() {
        args.inputs
    } else if args.all {
        DEMO_SUITE.iter().map(|s| s.to_string()).collect()
    } else {
        Vec::new()
    };

    if suite.is_empty() {
        eprintln!("{USAGE}");
        eprintln!("\nProvide inputs (e.g. `anbn aabb$`) or use `--all`.");
        return Ok(ExitCode::from(2));
    }

    let mut overall_ok = true;
    for s in &suite {
        // fresh engine per input, like independent runs
        let mut m = Engine::anbn()?;
        let (ok, trace) = match m.run(s) {
            Ok(res) => res,
            Err(e) => {
                log::warn!("malformed input {s:?}");
                overall_ok = false;
                println!("\nInput: {s}\nERROR: {e}");
                continue;
            }
        };

        println!("\nInput: {s}  →  {}", if ok { "ACCEPT" } else { "REJECT" });
        if args.json {
            println!("{}", trace_to_json(trace)?);
        } else {
            print!("{}", TraceTable(trace));
        }
        overall_ok &= ok;
    }

    Ok(if overall_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

use seedpow::{Difficulty, NonceStart, SearchConfig, Seed};
use std::str::FromStr;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn usage() -> String {
    "Usage: cargo run --release --example search_demo -- \
      [--config <json>] [--seed-hex <64hex>] [--bits <u8>] [--start <i64> | --random-start] \
      [--max-attempts <u64>]\n\
      Flags override values from --config regardless of order.\n"
        .to_string()
}

fn parse_next<T: FromStr>(it: &mut impl Iterator<Item = String>, flag: &str) -> Result<T, String> {
    let v = it.next().ok_or_else(usage)?;
    v.parse::<T>().map_err(|_| format!("Invalid {flag}"))
}

#[derive(Debug, Default)]
struct Args {
    config: SearchConfig,
    seed_hex: Option<String>,
}

/// `None` when help was requested.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Option<Args>, String> {
    let args: Vec<String> = args.into_iter().collect();

    let mut parsed = Args::default();
    let mut it = args.iter().cloned();
    while let Some(a) = it.next() {
        if a == "--config" {
            let raw = it.next().ok_or_else(usage)?;
            parsed.config = SearchConfig::from_json(&raw).map_err(|e| e.to_string())?;
        }
    }

    let mut it = args.into_iter();
    while let Some(a) = it.next() {
        let config = &mut parsed.config;
        match a.as_str() {
            "--config" => {
                it.next();
            }
            "--seed-hex" => parsed.seed_hex = Some(it.next().ok_or_else(usage)?),
            "--bits" => {
                let bits: u8 = parse_next(&mut it, "--bits")?;
                config.difficulty = Difficulty::new(bits).map_err(|e| e.to_string())?;
            }
            "--start" => {
                config.start_nonce = Some(parse_next(&mut it, "--start")?);
                config.random_start = false;
            }
            "--random-start" => {
                config.start_nonce = None;
                config.random_start = true;
            }
            "--max-attempts" => config.max_attempts = Some(parse_next(&mut it, "--max-attempts")?),
            "-h" | "--help" => return Ok(None),
            _ => return Err(usage()),
        }
    }
    parsed.config.validate().map_err(|e| e.to_string())?;
    Ok(Some(parsed))
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let Some(Args { config, seed_hex }) = parse_args(std::env::args().skip(1))? else {
        print!("{}", usage());
        return Ok(());
    };

    let seed = match seed_hex {
        Some(hex) => Seed::from_hex(&hex).map_err(|e| e.to_string())?,
        None => Seed::from(rand::random::<[u8; 32]>()),
    };

    let t0 = Instant::now();
    let proof = seedpow::search_with_config(seed.as_bytes(), &config).map_err(|e| e.to_string())?;
    let dt_ms = t0.elapsed().as_millis();

    let checked = seedpow::verify(seed.as_bytes(), proof.nonce(), proof.target())
        .map_err(|e| e.to_string())?;

    tracing::info!(nonce = %checked, elapsed_ms = dt_ms as u64, "verified proof");
    println!("{checked:?}");
    if let NonceStart::Fixed(start) = config.nonce_start() {
        println!("tries: {}", checked.nonce().get().wrapping_sub(start.get()));
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&checked).map_err(|e| e.to_string())?
    );
    Ok(())
}

use anyhow::{bail, Context};
use clap::Parser;
use curlify::config::Config;
use curlify::{convert, render, AssembleDefaults, BodyOutcome, CurlComponents};
use std::io::{BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;

const VERBS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

#[derive(Parser)]
#[command(name = "curlify", about = "Turn a pasted HTTP request log into a curl command")]
struct Cli {
    /// File holding the pasted log; reads stdin when omitted.
    input: Option<PathBuf>,

    /// HTTP verb to use when none can be inferred (skips the prompt).
    #[arg(long, value_parser = parse_verb)]
    method: Option<String>,

    /// Drop the body instead of failing when it cannot be normalized.
    #[arg(long)]
    no_body: bool,

    /// Fail on anything that would otherwise require a prompt or fallback.
    #[arg(long, conflicts_with_all = ["method", "no_body"])]
    strict: bool,

    /// Write debug logs to /tmp/curlify-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn parse_verb(s: &str) -> Result<String, String> {
    let upper = s.to_uppercase();
    if VERBS.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(format!("unknown HTTP verb {s:?}; expected one of {VERBS:?}"))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/curlify-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("curlify debug log started — tail -f /tmp/curlify-debug.log");
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        Config::defaults()
    });

    let text = read_input(cli.input.as_deref())?;
    let conversion = convert(&text).context("could not convert the pasted log")?;

    // Interactive fallbacks need a terminal on stdin; piped input rules
    // them out regardless of config.
    let interactive =
        cli.input.is_some() && std::io::stdin().is_terminal() && !cli.strict;

    let method = match conversion.method.clone().or_else(|| cli.method.clone()) {
        Some(m) => m,
        None if interactive && config.prompt.method => prompt_for_method()?,
        None => bail!(
            "no HTTP method found in the log; pass --method <VERB> to supply one"
        ),
    };

    let body = match conversion.body {
        BodyOutcome::Json(json) => Some(json),
        BodyOutcome::Absent => None,
        BodyOutcome::Failed(_) if cli.no_body => None,
        BodyOutcome::Failed(err) if interactive => {
            if confirm_proceed_without_body(&err)? {
                None
            } else {
                bail!("aborted: {err}");
            }
        }
        BodyOutcome::Failed(err) => {
            bail!("{err}; pass --no-body to build the command without a body")
        }
    };

    let components = CurlComponents {
        url: conversion.url,
        method,
        token: conversion.token,
        body,
        custom_headers: conversion.custom_headers,
    };
    let defaults = AssembleDefaults {
        accept: config.headers.accept,
        content_type: config.headers.content_type,
    };

    println!("{}", render(&components, &defaults));
    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Numbered verb menu on stderr, answer on stdin. Accepts an index or a
/// verb name.
fn prompt_for_method() -> anyhow::Result<String> {
    let mut err = std::io::stderr().lock();
    writeln!(err, "No HTTP method could be inferred. Pick one:")?;
    for (i, verb) in VERBS.iter().enumerate() {
        writeln!(err, "  {}: {verb}", i + 1)?;
    }
    write!(err, "> ")?;
    err.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();

    if let Ok(n) = answer.parse::<usize>() {
        if (1..=VERBS.len()).contains(&n) {
            return Ok(VERBS[n - 1].to_string());
        }
    }
    parse_verb(answer).map_err(anyhow::Error::msg)
}

fn confirm_proceed_without_body(err: &curlify::ParseError) -> anyhow::Result<bool> {
    let mut stderr = std::io::stderr().lock();
    writeln!(stderr, "The body could not be normalized: {err}")?;
    write!(stderr, "Build the command without a body? [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

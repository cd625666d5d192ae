//! Headless execution of CLI subcommands
//!
//! Each subcommand maps onto one backend operation and prints a short
//! human-readable result to stdout.

use std::io::Write;
use std::time::Duration;

use dialoguer::Confirm;

use crate::audio;
use crate::backend::BackendClient;
use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;

pub const DELETE_ALL_PROMPT: &str = "Are you sure you want to delete ALL files? This action cannot be undone.";

pub fn run(command: &Command, config: &Config) -> Result<()> {
    let client = BackendClient::from_config(config);
    let rt = tokio::runtime::Runtime::new()?;
    let mut stdout = std::io::stdout().lock();
    rt.block_on(execute(command, &client, config, &mut stdout, confirm))
}

/// Run one subcommand against `client`, writing results to `out`.
/// `ask` is consulted before destructive operations unless `--yes` was given.
pub async fn execute<W, F>(
    command: &Command,
    client: &BackendClient,
    config: &Config,
    out: &mut W,
    mut ask: F,
) -> Result<()>
where
    W: Write,
    F: FnMut(&str) -> Result<bool>,
{
    match command {
        Command::List => {
            let files = client.list_files().await?;
            if files.is_empty() {
                writeln!(out, "No files uploaded yet")?;
            }
            for file in &files {
                writeln!(out, "{}", file.label())?;
            }
        }

        Command::Upload { path } => {
            client.upload(path).await?;
            writeln!(out, "File uploaded successfully!")?;
        }

        Command::Search { query } => {
            let query = query.join(" ");
            let query = query.trim();
            if query.is_empty() {
                writeln!(out, "Nothing to search for")?;
                return Ok(());
            }

            let results = client.search(query).await?;
            if results.is_empty() {
                writeln!(out, "No results")?;
            }
            for (i, result) in results.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, result.content)?;
                writeln!(
                    out,
                    "   File: {}  Page: {}  Chunk: {}",
                    result.filename,
                    result.page(),
                    result.chunk()
                )?;
            }
        }

        Command::Delete { filename, yes } => {
            let prompt = format!("Are you sure you want to delete {}?", filename);
            if !yes && !ask(&prompt)? {
                writeln!(out, "Cancelled")?;
                return Ok(());
            }
            client.delete_file(filename).await?;
            writeln!(out, "Deleted {}", filename)?;
        }

        Command::DeleteAll { yes } => {
            let files = client.list_files().await?;
            if files.is_empty() {
                writeln!(out, "No files to delete")?;
                return Ok(());
            }
            if !yes && !ask(DELETE_ALL_PROMPT)? {
                writeln!(out, "Cancelled")?;
                return Ok(());
            }
            client.delete_all().await?;
            writeln!(out, "Deleted all files")?;
        }

        Command::Transcribe { seconds } => {
            let window = seconds
                .map(Duration::from_secs)
                .unwrap_or_else(|| config.record_duration());
            writeln!(out, "Recording for {} seconds...", window.as_secs())?;
            out.flush()?;
            let wav = tokio::task::spawn_blocking(move || audio::record_wav(window))
                .await
                .map_err(std::io::Error::other)??;
            let text = client.speech_to_text(wav).await?;
            writeln!(out, "Text is: {}", text)?;
        }

        Command::Config => {
            writeln!(out, "# {}", Config::config_path()?.display())?;
            writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

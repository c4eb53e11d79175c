use anyhow::Result;
use clap::Parser;
use cloak_cipher::{transform, Mode};
use cloak_history::Ledger;
use std::io::{self, Write};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "cloak-messenger")]
#[command(about = "Keyed message obfuscation with an in-memory audit history", long_about = None)]
struct Cli {
    /// Default operator name recorded with each history entry
    #[arg(long, default_value = "anonymous")]
    name: String,

    /// Print history as JSON lines instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let ledger = Ledger::new();

    info!("cloak-messenger ready");
    println!("commands: e|encrypt, d|decrypt, history, clear, q|quit");

    loop {
        let Some(line) = prompt("cloak> ")? else {
            break; // stdin closed
        };
        match line.as_str() {
            "" => continue,
            "e" | "encrypt" => run_transform(Mode::Encrypt, &cli.name, &ledger)?,
            "d" | "decrypt" => run_transform(Mode::Decrypt, &cli.name, &ledger)?,
            "history" => print_history(&ledger, cli.json)?,
            "clear" => {
                ledger.clear();
                println!("history cleared");
            }
            "q" | "quit" | "exit" => break,
            other => {
                warn!(command = other, "unknown command");
                println!("unknown command {other:?}");
            }
        }
    }
    Ok(())
}

/// Prompt on stdout and read one trimmed line; None once stdin closes.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn run_transform(mode: Mode, default_name: &str, ledger: &Ledger) -> Result<()> {
    let Some(name) = prompt("Name: ")? else {
        return Ok(());
    };
    let name = if name.is_empty() { default_name } else { name.as_str() };

    let message_label = match mode {
        Mode::Encrypt => "Message: ",
        Mode::Decrypt => "Ciphertext: ",
    };
    let Some(message) = prompt(message_label)? else {
        return Ok(());
    };
    let key = rpassword::prompt_password("Key: ")?;

    match transform(&key, &message, mode) {
        Ok(result) => {
            println!("{result}");
            let entry = ledger.record(name, mode, &message, &result);
            info!("recorded {} for {}", entry.operation, entry.name);
        }
        Err(err) => {
            // Nothing is recorded for a failed transform.
            warn!("transform rejected: {err}");
            println!("error: {err}");
        }
    }
    Ok(())
}

fn print_history(ledger: &Ledger, json: bool) -> Result<()> {
    let entries = ledger.entries();
    if entries.is_empty() {
        println!("(history is empty)");
        return Ok(());
    }
    if json {
        let mut stdout = io::stdout().lock();
        for entry in &entries {
            serde_json::to_writer(&mut stdout, entry)?;
            writeln!(stdout)?;
        }
        return Ok(());
    }
    println!(
        "{:<19}  {:<10}  {:<7}  {:<28}  {}",
        "recorded (UTC)", "name", "op", "input", "result"
    );
    for entry in &entries {
        println!(
            "{:<19}  {:<10}  {:<7}  {:<28}  {}",
            entry.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            entry.name,
            entry.operation.to_string(),
            entry.input,
            entry.result
        );
    }
    Ok(())
}

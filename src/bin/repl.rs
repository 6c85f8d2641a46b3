use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use geez_core::persistence::{load_or_new, save_history};
use geez_core::{ConversionHistory, Direction, HistoryConfig};
use std::io::{self, stdin, stdout, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geez_repl", version, about = "Interactive Ge'ez numeral converter")]
struct Args {
    /// Where the conversion history is kept between sessions.
    #[arg(long, env = "GEEZ_HISTORY", default_value = "geez_history.bin")]
    history: PathBuf,

    /// Number of conversions to remember.
    #[arg(long, default_value_t = HistoryConfig::default().capacity)]
    capacity: usize,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut history = load_or_new(&args.history, HistoryConfig { capacity: args.capacity });

    println!("Ge'ez numeral converter. Type 'exit' to save and quit.");
    println!("Digits are encoded, anything else is decoded. ':history' lists past conversions, ':clear' clears the screen.");
    println!("---------------------------------------------------------------");

    loop {
        print!("{} ", ">".bold());
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "exit" => break,
            "" => {}
            ":history" => print_history(&history),
            ":clear" => execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?,
            line => match history.convert(line) {
                Ok(record) => {
                    let label = match record.direction {
                        Direction::ToGeez => "Ge'ez:",
                        Direction::FromGeez => "Arabic:",
                    };
                    println!("{} {}", label.green().bold(), record.output);
                }
                Err(e) => println!("{} {}", "Error:".red().bold(), e),
            },
        }
    }

    println!("\nSaving history...");
    if let Err(e) = save_history(&history, &args.history) {
        eprintln!("[ERROR] Could not save history: {}", e);
    } else {
        println!("History saved to '{}'", args.history.display());
    }
    Ok(())
}

fn print_history(history: &ConversionHistory) {
    if history.is_empty() {
        println!("No conversions yet.");
        return;
    }
    for (i, record) in history.records().enumerate() {
        println!("  {:>3}: {} {} {}", i + 1, record.input, "→".dark_grey(), record.output);
    }
}

// Line protocol over stdin/stdout for host processes:
//   ENCODE <n>              -> OK <numeral> | ERR <message>
//   DECODE <numeral>        -> OK <n>
//   DECODE_STRICT <numeral> -> OK <n> | ERR <message>
//   EXIT
use geez_core::{decode, decode_strict, encode};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

fn main() -> io::Result<()> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("geez pipe starting");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        debug!(?input, "<-");
        let (command, argument) = input.trim().split_once(' ').unwrap_or((input.trim(), ""));

        let reply = match command {
            "ENCODE" => match encode(argument) {
                Ok(numeral) => format!("OK {}", numeral),
                Err(e) => format!("ERR {}", e),
            },
            "DECODE" => format!("OK {}", decode(argument.trim())),
            "DECODE_STRICT" => match decode_strict(argument.trim()) {
                Ok(value) => format!("OK {}", value),
                Err(e) => format!("ERR {}", e),
            },
            "EXIT" => break,
            "" => continue,
            other => format!("ERR unknown command {:?}", other),
        };

        debug!(?reply, "->");
        writeln!(stdout, "{}", reply)?;
        stdout.flush()?;
    }

    info!("geez pipe shutting down");
    Ok(())
}

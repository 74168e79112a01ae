//! Gomocup brain over stdin/stdout.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use gomoku_brain::Engine;

const OUTPUT_POLL: Duration = Duration::from_millis(20);

fn main() -> io::Result<()> {
    let engine = Arc::new(Engine::new()?);

    let reader = Arc::clone(&engine);
    thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        reader.push_commands(&line);
                    }
                    Err(_) => break,
                }
            }
            reader.push_commands("END");
        })?;

    let mut stdout = io::stdout();
    loop {
        if let Some(line) = engine.read_output(OUTPUT_POLL) {
            writeln!(stdout, "{line}")?;
            stdout.flush()?;
        } else if engine.is_finished() && engine.is_output_empty() {
            break;
        }
    }
    Ok(())
}

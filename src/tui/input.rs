//! Keyboard input for interactive prompts.
//!
//! Raw-mode single-key reads when stdin is a terminal, plain line reads
//! otherwise.

use std::io::BufRead;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::cli::quiet;
use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Interpret a y/n answer; empty input takes `default`.
pub fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn read_line() -> Option<String> {
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

/// Next key press from `read`, skipping non-key events and releases.
/// A read error ends input (closed tty) instead of being retried.
fn next_key(mut read: impl FnMut() -> std::io::Result<Event>) -> Option<KeyEvent> {
    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return Some(key),
            Ok(_) => continue,
            Err(e) => {
                log::debug!("terminal read failed: {e}");
                return None;
            }
        }
    }
}

fn interrupt() -> ! {
    reset_terminal();
    println!();
    std::process::exit(130);
}

/// Ask a yes/no question. `None` means the user cancelled (Esc or EOF).
pub fn confirm(prompt: &str, default: bool) -> Option<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!("{prompt} {hint}: ");
    flush();

    if !quiet::is_interactive() {
        loop {
            let line = read_line()?;
            if let Some(answer) = parse_answer(&line, default) {
                return Some(answer);
            }
        }
    }

    let answer = {
        let _guard = RawModeGuard::new().ok()?;
        loop {
            let Some(key) = next_key(read) else {
                break None;
            };
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    drop(_guard);
                    interrupt();
                }
                KeyCode::Esc => break None,
                KeyCode::Enter => break Some(default),
                KeyCode::Char('y') | KeyCode::Char('Y') => break Some(true),
                KeyCode::Char('n') | KeyCode::Char('N') => break Some(false),
                _ => {}
            }
        }
    };

    match answer {
        Some(true) => println!("y"),
        Some(false) => println!("n"),
        None => println!(),
    }
    answer
}

/// Read a number, pre-filled with `initial`. `None` on Esc or EOF.
///
/// Non-digit input in line mode yields `Some(0)` so the caller's range check
/// rejects it and asks again.
pub fn get_numeric_input(prompt: &str, initial: usize) -> Option<usize> {
    if !quiet::is_interactive() {
        print!("{prompt} [{initial}]: ");
        flush();
        let line = read_line()?;
        let line = line.trim();
        if line.is_empty() {
            return Some(initial);
        }
        return Some(line.parse().unwrap_or(0));
    }

    let mut digits = initial.to_string();
    print!("{prompt}: {digits}");
    flush();

    let cancelled = {
        let _guard = RawModeGuard::new().ok()?;
        loop {
            let Some(key) = next_key(read) else {
                break true;
            };
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    drop(_guard);
                    interrupt();
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    digits.clear();
                }
                KeyCode::Esc => break true,
                KeyCode::Enter => break false,
                KeyCode::Backspace => {
                    digits.pop();
                }
                // usize::MAX has 20 digits; anything longer cannot parse
                KeyCode::Char(c) if c.is_ascii_digit() && digits.len() < 19 => digits.push(c),
                _ => {}
            }
            print!("\r\x1b[2K{prompt}: {digits}");
            flush();
        }
    };
    println!();

    if cancelled {
        return None;
    }
    Some(digits.parse().unwrap_or(0))
}

use rand_core::RngCore;

use crate::clipboard::Clipboard;
use crate::pass;
use crate::pass::charset::{self, CharClass};
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::{BOLD, RESET, box_bottom, box_line, box_top, print_error};

use super::{confirm, get_numeric_input, print_banner};

pub const DEFAULT_LENGTH: usize = 8;

/// Range-check a length typed at the prompt.
pub fn check_length(length: usize) -> Result<usize, String> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(format!(
            "Length must be between {MIN_LENGTH} and {MAX_LENGTH} characters!"
        ))
    }
}

/// Keep asking until a length in range comes back; `None` if the user quits.
fn ask_length(
    mut next: impl FnMut() -> Option<usize>,
    mut report: impl FnMut(&str),
) -> Option<usize> {
    loop {
        match check_length(next()?) {
            Ok(length) => return Some(length),
            Err(msg) => report(&msg),
        }
    }
}

/// Ask about every catalog class, again from the top if none was chosen.
fn ask_classes(
    mut answer: impl FnMut(CharClass) -> Option<bool>,
    mut report: impl FnMut(&str),
) -> Option<Settings> {
    loop {
        let mut settings = Settings::default();
        for class in CharClass::ALL {
            settings.set_class(class, answer(class)?);
        }
        if settings.any_class() {
            return Some(settings);
        }
        report("You must choose at least one class of characters for the password!");
    }
}

fn show(password: &pass::Password, size: usize) {
    let bits = charset::entropy_bits(password.char_count(), size);
    println!();
    box_top("Password");
    box_line(&format!("{BOLD}{password}{RESET}"));
    box_line("");
    box_line(&format!(
        "{:.1} bits ({}) • Charset: {} chars",
        bits,
        charset::entropy_strength(bits),
        size
    ));
    box_bottom();
    println!();
}

/// Prompt, generate and display until the user stops.
pub fn session(rng: &mut dyn RngCore) {
    print_banner();

    loop {
        let Some(length) = ask_length(
            || get_numeric_input("Enter length", DEFAULT_LENGTH),
            print_error,
        ) else {
            return;
        };
        let Some(mut settings) = ask_classes(
            |class| confirm(&format!("Use {} character class?", class.label()), true),
            print_error,
        ) else {
            return;
        };
        settings.pass_length = length;

        let classes = charset::classes(&settings);
        let password = match pass::generate(&mut *rng, length, &classes) {
            Ok(p) => p,
            Err(e) => {
                print_error(&e.to_string());
                continue;
            }
        };
        show(&password, charset::size(&classes));

        if confirm("Copy to clipboard?", false) == Some(true) {
            match Clipboard::open().and_then(|mut c| c.copy(&password)) {
                Ok(()) => println!("*** -COPIED TO CLIPBOARD- ***"),
                Err(e) => print_error(&e.to_string()),
            }
        }

        if confirm("Generate another?", false) != Some(true) {
            return;
        }
    }
}

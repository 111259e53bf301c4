use std::env;

mod cli;
mod clipboard;
mod exits;
mod pass;
mod rand;
mod settings;
mod terminal;
mod tui;

use settings::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exits::install_handlers();
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 if !Settings::has_saved() => {
            tui::run(rand::Source::default());
            0
        }
        _ => cli::run(args),
    };
    std::process::exit(code);
}

//! Terminal restoration on exit and on termination signals.

/// Put the terminal back into cooked mode with echo.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit; runs on every normal exit.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Escape codes only when stdout is a terminal, not when piping
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            let seq = b"\x1b[0m\x1b[?25h";
            libc::write(
                libc::STDOUT_FILENO,
                seq.as_ptr() as *const libc::c_void,
                seq.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit through atexit so cleanup runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register the atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

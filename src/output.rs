use owo_colors::OwoColorize;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Menu text and prompts go
/// through here so scripted input still sees stable output.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// One-line operation outcome: `true - ` on success, `false - <error>` on
/// failure. Every menu action ends with exactly one of these.
pub fn print_status(ok: bool, err: &str) {
    let line = format!("{} - {}", ok, err);
    if is_tty() {
        println!("{}", line.yellow());
    } else {
        println!("{}", line);
    }
}

/// Per-file / per-event detail line printed by the list and watch actions.
pub fn print_item(msg: &str) {
    if is_tty() {
        println!("{}", msg.yellow());
    } else {
        println!("{}", msg);
    }
}

/// Separator printed between menu rounds.
pub fn print_rule() {
    let rule = "================================================";
    if is_tty() {
        println!("{}", rule.blue());
    } else {
        println!("{}", rule);
    }
}

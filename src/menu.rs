//! Interactive numbered menu loop.
//!
//! Presents the available actions with 1-based indices, reads one line,
//! dispatches, and re-presents the menu until Exit is chosen, stdin reaches
//! EOF, or a shutdown is requested. Each dispatched action reports whether
//! the loop should continue via [`MenuFlow`]; there is no shared exit flag.

use std::io::{self, BufRead};

use tracing::debug;

use crate::errors::OpResult;
use crate::fs_ops;
use crate::output as out;
use crate::shutdown;
use crate::watch;

/// Loop-control result returned by every dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFlow {
    Continue,
    Stop,
}

const MENU_ITEMS: &[&str] = &[
    "Create directory",
    "Check directory exists",
    "Copy file to directory",
    "List files in directory",
    "Delete file",
    "Download file",
    "Watch directory",
    "Exit",
];

/// The interactive menu over any line-based input source. Production wires
/// this to a locked stdin; tests drive it with a `Cursor`.
pub struct Menu<R: BufRead> {
    input: R,
    default_proxy: Option<String>,
}

impl<R: BufRead> Menu<R> {
    pub fn new(input: R, default_proxy: Option<String>) -> Self {
        Self {
            input,
            default_proxy,
        }
    }

    /// Run until Exit, EOF, or shutdown request.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if shutdown::is_requested() {
                debug!("shutdown requested; leaving menu loop");
                return Ok(());
            }

            print_menu();
            let Some(choice) = self.read_line()? else {
                return Ok(());
            };
            if self.dispatch(choice.trim())? == MenuFlow::Stop {
                return Ok(());
            }
            out::print_rule();
        }
    }

    fn dispatch(&mut self, choice: &str) -> io::Result<MenuFlow> {
        match choice.parse::<usize>() {
            Ok(n) if (1..=MENU_ITEMS.len()).contains(&n) => self.action(n),
            _ => {
                out::print_error("Invalid target number!");
                Ok(MenuFlow::Continue)
            }
        }
    }

    fn action(&mut self, index: usize) -> io::Result<MenuFlow> {
        debug!(index, item = MENU_ITEMS[index - 1], "dispatching menu action");
        match index {
            1 => {
                let dir = self.prompt("Please enter directory path:")?;
                print_status(&fs_ops::create_directory(&dir));
            }
            2 => {
                let dir = self.prompt("Please enter directory path:")?;
                print_status(&fs_ops::directory_exists(&dir));
            }
            3 => {
                let file = self.prompt("Please enter file path:")?;
                let dir = self.prompt("Please enter directory path:")?;
                print_status(&fs_ops::copy_file_to_directory(&file, &dir));
            }
            4 => {
                let dir = self.prompt("Please enter directory path:")?;
                match fs_ops::read_files_from_directory(&dir) {
                    Ok(files) => {
                        for file in &files {
                            out::print_item(&file.describe());
                        }
                        out::print_status(true, "");
                    }
                    Err(e) => out::print_status(false, &e.to_string()),
                }
            }
            5 => {
                let file = self.prompt("Please enter file path:")?;
                print_status(&fs_ops::delete_file(&file));
            }
            6 => {
                let url = self.prompt("Please enter URL:")?;
                let name = self.prompt("Please enter file name:")?;
                let dir = self.prompt("Please enter directory path:")?;
                let proxy = self.prompt("Please enter proxy address (blank for none):")?;
                let proxy = if proxy.trim().is_empty() {
                    self.default_proxy.clone()
                } else {
                    Some(proxy)
                };
                print_status(&fs_ops::download_and_save(&url, &name, &dir, proxy.as_deref()));
            }
            7 => {
                let dir = self.prompt("Please enter directory path:")?;
                out::print_user("Press enter to exit watch mode");
                let input = &mut self.input;
                let result = watch::watch_directory(
                    &dir,
                    // Runs on the watch consumer thread.
                    |ev| out::print_item(&ev.describe()),
                    move || {
                        let mut sink = String::new();
                        let _ = input.read_line(&mut sink);
                    },
                );
                print_status(&result);
            }
            8 => return Ok(MenuFlow::Stop),
            _ => unreachable!("dispatch bounds-checks the index"),
        }
        Ok(MenuFlow::Continue)
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        out::print_user(message);
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// One line of input; None on EOF.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn print_menu() {
    out::print_user("Please enter the number of the targeted action:");
    out::print_user("");
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        out::print_user(&format!("{}. {}", i + 1, item));
    }
    out::print_user("");
}

fn print_status<T>(result: &OpResult<T>) {
    match result {
        Ok(_) => out::print_status(true, ""),
        Err(e) => out::print_status(false, &e.to_string()),
    }
}

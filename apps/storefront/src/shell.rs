//! # Shell
//!
//! Line-driven front end: reads commands, prints screens.
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  render Home ("Loading…")                                               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  loop select! (biased)                                                  │
//! │    ├── catalog fetch finished (once) ──► notice + Home re-render       │
//! │    └── input line ──► ShellCommand::parse ──► Session::execute ──► text │
//! │                                                                         │
//! │  `quit` or end of input ends the loop                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;
use storefront_catalog::{fetch_catalog, CatalogProvider};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::session::Session;

/// Text printed by `help`.
pub const HELP: &str = "\
Commands:
  home | products       Show the product list
  categories            List categories
  filter <name> | all   Filter the product list by category
  show <id>             Product details
  add <id>              Add a product to the cart
  inc <id> / dec <id>   Change a cart quantity
  remove <id>           Remove a product from the cart
  cart                  Show the cart
  clear                 Empty the cart
  buy                   Place the order
  help                  This text
  quit                  Leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Home,
    Categories,
    /// `None` clears the filter.
    Filter(Option<String>),
    Show(String),
    Add(String),
    Increase(String),
    Decrease(String),
    Remove(String),
    Cart,
    Clear,
    Buy,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses a line. Blank lines give `Ok(None)`.
    ///
    /// Commands are case-insensitive; arguments are kept as typed.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let argument = |usage: &str| -> AppResult<String> {
            if rest.is_empty() {
                Err(AppError::validation(format!("Usage: {}", usage)))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "home" | "products" => ShellCommand::Home,
            "categories" => ShellCommand::Categories,
            "filter" => {
                let name = argument("filter <category> | all")?;
                if name.eq_ignore_ascii_case("all") {
                    ShellCommand::Filter(None)
                } else {
                    ShellCommand::Filter(Some(name))
                }
            }
            "show" => ShellCommand::Show(argument("show <id>")?),
            "add" => ShellCommand::Add(argument("add <id>")?),
            "inc" => ShellCommand::Increase(argument("inc <id>")?),
            "dec" => ShellCommand::Decrease(argument("dec <id>")?),
            "remove" => ShellCommand::Remove(argument("remove <id>")?),
            "cart" => ShellCommand::Cart,
            "clear" => ShellCommand::Clear,
            "buy" => ShellCommand::Buy,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(AppError::validation(format!(
                    "Unknown command: {} (type 'help')",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn prompt<W: Write>(output: &mut W) -> AppResult<()> {
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

/// Runs the session until `quit` or end of input.
///
/// The catalog is fetched once, concurrently with reading input; the Home
/// screen shows "Loading…" until it arrives.
pub async fn run_shell<P, R, W>(
    session: &mut Session,
    provider: &P,
    input: R,
    output: &mut W,
) -> AppResult<()>
where
    P: CatalogProvider + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    let fetch = fetch_catalog(provider);
    tokio::pin!(fetch);
    let mut fetching = true;

    writeln!(output, "{}", session.render()?)?;
    prompt(output)?;

    loop {
        tokio::select! {
            biased;

            result = &mut fetch, if fetching => {
                fetching = false;
                let notice = session.catalog_arrived(result);
                writeln!(output, "\n{}", notice)?;
                prompt(output)?;
            }

            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("End of input");
                    break;
                };

                match ShellCommand::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(ShellCommand::Quit)) => {
                        writeln!(output, "Goodbye.")?;
                        break;
                    }
                    Ok(Some(command)) => match session.execute(command) {
                        Ok(text) => writeln!(output, "{}", text)?,
                        Err(e) => writeln!(output, "Error: {}", e.message)?,
                    },
                    Err(e) => writeln!(output, "Error: {}", e.message)?,
                }

                prompt(output)?;
            }
        }
    }

    output.flush()?;
    info!("Session ended");
    Ok(())
}

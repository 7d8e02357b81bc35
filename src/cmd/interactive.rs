//! The prompt-translate-retry loop — `numeral` and `numeral interactive`.

use anyhow::Result;
use std::io::IsTerminal;
use std::path::Path;

use numeral::config::{Config, Overrides};

pub fn cmd_interactive(working_dir: &Path, overrides: &Overrides) -> Result<()> {
    use numeral::session::{LinePrompter, Session, TerminalPrompter};

    let config = Config::new(working_dir, overrides)?;
    let tables = config.load_tables()?;
    let decomposer = tables.decomposer();

    let summary = if std::io::stdin().is_terminal() && console::user_attended() {
        Session::new(decomposer, TerminalPrompter::new(), config.capitalize).run()?
    } else {
        let stdin = std::io::stdin();
        let prompter = LinePrompter::new(stdin.lock(), std::io::stdout(), std::io::stderr());
        Session::new(decomposer, prompter, config.capitalize).run()?
    };

    tracing::info!(
        "Translated {} number(s), rejected {}",
        summary.translated,
        summary.rejected
    );
    Ok(())
}

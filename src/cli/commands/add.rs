use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::note::StdinNoteSource;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Append a new dated entry to the journal.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = expand_tilde(&cfg.logfile);

    let entry = AddLogic::apply(
        &path,
        cli.date.as_deref(),
        &cli.note,
        cli.prompt,
        cli.force,
        &cfg.default_note,
        &mut StdinNoteSource,
    )?;

    println!("Logged: {}", entry);
    Ok(())
}

use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Print the last `count` journal entries, one per line, verbatim.
pub fn handle(cfg: &Config, count: i64) -> AppResult<()> {
    let path = expand_tilde(&cfg.logfile);

    for line in ListLogic::last_entries(&path, count)? {
        println!("{}", line);
    }

    Ok(())
}

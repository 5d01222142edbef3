// Orchestration: catalog fetch, then one search per title in catalog
// order, writing a formatted line per title. A failure on any item
// stops the run; lines already written stay written.

use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};

use crate::api::PosterApi;
use crate::error::LookupError;
use crate::output::format_line;

/// Run the full lookup pipeline against `api`, writing one line per
/// catalog item to `out` in catalog order.
///
/// The spinner reports progress on stderr only; it is hidden when
/// stderr is not a terminal, so piped output stays clean.
pub fn run<A: PosterApi, W: Write>(api: &A, out: &mut W) -> Result<(), LookupError> {
    let catalog = api.fetch_catalog()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());

    for item in &catalog {
        spinner.set_message(format!("searching poster for '{}'", item.title));
        spinner.tick();
        let thumbnail_url = api.search_poster(&item.title)?;
        writeln!(out, "{}", format_line(&item.title, &thumbnail_url))?;
    }

    spinner.finish_and_clear();
    Ok(())
}

// Entrypoint for the poster-lookup CLI.
// - Loads the Ghibli film catalog and resolves a poster thumbnail per
//   title through the Bing image-search API.
// - Requires the `BING_SEARCH_API_KEY` environment variable; there are
//   no command-line arguments.
// - Prints one `'title': 'url'` line per film to stdout. The block can
//   be pasted into a source-level poster table as-is.

use std::io::{self, Write};

use poster_lookup::api::ApiClient;
use poster_lookup::config::Config;
use poster_lookup::error::LookupError;
use poster_lookup::run::run;

fn try_main() -> Result<(), LookupError> {
    // Credential is validated here, before any HTTP call happens.
    let config = Config::from_env()?;
    let api = ApiClient::new(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&api, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

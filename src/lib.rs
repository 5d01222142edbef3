// Library root
// -----------
// This crate exposes a small library surface for the poster-lookup CLI.
// The binary (`main.rs`) wires these modules into a single pipeline.
//
// Module responsibilities:
// - `config`: Explicit configuration (search credential + endpoint
//   URLs), resolved from the environment once at startup.
// - `error`: The failure taxonomy and its exit-code mapping.
// - `api`: Blocking HTTP client for the catalog and image-search
//   endpoints, plus the response models.
// - `output`: Title escaping and output-line formatting.
// - `run`: The orchestration loop (catalog -> per-title search ->
//   formatted line), generic over the API seam for testing.
pub mod api;
pub mod config;
pub mod error;
pub mod output;
pub mod run;

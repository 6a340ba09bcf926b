// Composition root for the webhook history service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the file-backed event history.
// - Wire it into the ingest handler and expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;

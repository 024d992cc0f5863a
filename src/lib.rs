//! nexora — terminal reader for the Nexora tech & AI blog.
//!
//! The binary either starts the ratatui interface (`nexora-tui`) or, with
//! `--list` / `--show`, prints the listing or one article and exits. The
//! headless printers live here so the integration harnesses can call them
//! without spawning a process.
//!
//! # Architecture
//!
//! ```text
//! nexora-core (store, parser, filter, view state)
//!      │
//!      ├──► nexora-tui (interactive)
//!      └──► headless   (stdout, text or json)
//! ```

pub mod headless;

//! Small HTTP relay resolving a Riot ID to a solo queue ranked summary.
//!
//! The crate exposes a single inbound API route backed by three chained
//! Riot API lookups (account, summoner, league entries).

pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod riot;
pub mod server;

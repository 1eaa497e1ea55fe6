//! Typed wrappers around the Riot API REST endpoints used by the relay.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::RiotClient;
pub use types::{AccountDto, LeagueEntryDto, RiotApiError, RiotApiResponse, SummonerDto};

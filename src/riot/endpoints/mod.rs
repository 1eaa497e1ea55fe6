//! One module per upstream API group, each extending [`RiotClient`].
//!
//! [`RiotClient`]: super::RiotClient

mod account;
mod league;
mod summoner;

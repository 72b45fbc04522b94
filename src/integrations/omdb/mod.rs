pub mod client;

pub use client::{MovieLookup, OmdbClient, OmdbMovie};

#[cfg(test)]
pub use client::MockMovieLookup;

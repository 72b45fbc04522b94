// src/integrations/mod.rs
//
// External Integrations Module

pub mod omdb;

pub use omdb::{MovieLookup, OmdbClient, OmdbMovie};

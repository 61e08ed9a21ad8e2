//! Community feed library.
//!
//! Composes the visible post feed of a neighbourhood social client from a
//! post collection and the user's search, community, type and sort
//! selection, and serves it together with post publishing and member
//! progress over a small JSON API.

pub mod config;
pub mod constants;
pub mod draft;
pub mod feed;
pub mod gamification;
pub mod model;
pub mod source;
pub mod web;

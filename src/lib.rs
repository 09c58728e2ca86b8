//! Newsroom content hub: localized story feeds, navigation data and image
//! framing served over a remote newsroom content API.
//!
//! [`feed::pagination::FeedSection`] is the "load more" state machine front
//! ends drive against `/api/stories`; [`routes::create_routes`] builds the
//! HTTP service the binary runs.

pub mod branding;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod handlers;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod state;
pub mod utils;

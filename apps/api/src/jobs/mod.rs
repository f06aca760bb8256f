// Job search & ranking engine.
// Catalog generation, salary estimation, search, relevance, recommendations, analytics.
// Everything below `service` is synchronous and pure; `service` adds the async surface.

pub mod analytics;
pub mod catalog;
pub mod handlers;
pub mod recommend;
pub mod relevance;
pub mod salary;
pub mod search;
pub mod service;

pub use service::{JobService, LatencyProfile};

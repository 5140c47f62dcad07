// Adapters layer: concrete implementations of the domain ports (http, cache, notifications).

pub mod cache;
pub mod http;
pub mod notify;

// Adapters layer: concrete implementations of domain ports against external systems.

pub mod http;

pub use http::ReqwestHttpClient;

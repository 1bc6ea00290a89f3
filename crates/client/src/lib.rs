//! Client for the Durable Objects listing endpoints of the Cloudflare API.

mod client;
pub mod error;
mod pagination;


pub use client::ListingClient;
pub use error::ClientError;
pub use pagination::collect_pages;

//! Backend contract for the Pruftnet site: waitlist wire types and the HTTP client
//! that talks to the `/waitlist` endpoint.

mod client;
mod error;
mod wire;

pub use client::WaitlistClient;
pub use error::ApiError;
pub use wire::{JoinReply, JoinRequest};

//! Typed client for the CRM service: activities, contacts and deals.

mod client;
mod crm_url;
pub mod domain;

pub use client::*;
pub use crm_url::*;

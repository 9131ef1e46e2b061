mod client;
mod dev_backend;

pub use client::{ApiClient, PageData};
pub use dev_backend::DevBackend;

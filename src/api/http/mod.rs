// src/api/http/mod.rs

pub mod handlers;
pub mod login;
pub mod pages;
pub mod router;

pub use router::http_router;

//! Platform-neutral core of the RideShare web client.
//!
//! Everything here compiles natively: the browser specifics (fetch, local
//! storage, history) sit behind the [`http::HttpClient`],
//! [`storage::SessionStore`] and [`navigation::Navigator`] traits and are
//! implemented by the `frontend` crate.

pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod navigation;
pub mod reservation;
pub mod review;
pub mod ride;
pub mod session;
pub mod storage;
pub mod user;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

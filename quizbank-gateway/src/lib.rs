//! HTTP API gateway for the quizbank question service.
//!
//! Exposes question CRUD, tag-filtered listing and random sampling over an
//! in-memory store shared by all request handlers.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;

//! Salary and compensation tracker.
//!
//! This crate keeps companies, their levels and compensation bands, and
//! user-submitted salary contributions in an in-memory store, and serves
//! them over HTTP together with aggregate salary statistics.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;
pub mod statistics;
pub mod store;

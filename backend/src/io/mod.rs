//! # IO Module
//!
//! The interface layer between HTTP clients and the domain services. The
//! only transport is the JSON REST API in [`rest`].

pub mod rest;

pub use rest::router;

//! Níbbo: a terminal rendition of an Abeokuta logistics super-app demo.
//!
//! All data is mocked in memory for a single session.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod domain;
pub mod links;
pub mod logging;
pub mod timer;
pub mod ui;

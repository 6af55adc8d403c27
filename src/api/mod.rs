//! API module
//!
//! Contains HTTP request handlers for the people endpoints

pub mod people;

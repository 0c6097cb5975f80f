//! API module
//!
//! Contains HTTP request handlers for the activity roster and signup endpoints

pub mod activities;

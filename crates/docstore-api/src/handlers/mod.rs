//! HTTP request handlers

pub mod documents;

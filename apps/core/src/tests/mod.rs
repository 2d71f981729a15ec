//! Test Module
//!
//! Cross-module test suite for the Taskwise backend.
//!
//! ## Test Categories
//! - `classifier_tests`: end-to-end classification scenarios and properties
//! - `enrichment_tests`: field precedence when enriching task drafts
//! - `api_tests`: HTTP contract of the classify and health routes

pub mod classifier_tests;

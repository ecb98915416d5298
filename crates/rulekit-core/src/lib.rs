//! Rulekit Core Library
//!
//! Core domain logic for curating coding rules and writing them into
//! assistant instruction files.

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod exchange;
pub mod format;
pub mod instructions;
pub mod legacy;
pub mod logging;
pub mod memory_files;
pub mod project;
pub mod records;
pub mod rule;
pub mod selection;
pub mod store;
pub mod suggest;
pub mod template;
pub mod tree;

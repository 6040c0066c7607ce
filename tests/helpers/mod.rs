//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod target_fixtures;
pub mod spec_assertions;

//! Test helpers for seedgen integration tests.
//!
//! This module provides the entity types shared by the integration suites.

#[path = "helpers/domain.rs"]
pub mod domain;

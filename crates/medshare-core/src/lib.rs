//! Core library for `medshare`: medicine-name search for the MedShare
//! request forms.
//!
//! Provides the fuzzy medicine matcher, the reference medicine catalog, and
//! user configuration.

pub mod catalog;
pub mod config;
pub mod error;
pub mod matcher;

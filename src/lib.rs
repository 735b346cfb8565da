//! pacfresh - Outdated package report library
//!
//! This library provides the core functionality for checking a curated,
//! grouped list of installed Arch Linux packages against:
//! - The official repositories (archlinux.org package search)
//! - The Arch User Repository (AUR RPC)

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod local;
pub mod normalize;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod reconcile;
pub mod registry;
pub mod report;

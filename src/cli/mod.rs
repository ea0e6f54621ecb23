//! CLI infrastructure for the quadtac binary
//!
//! This module provides the command-line interface for playing against,
//! analyzing, and evaluating the minimax opponent.

pub mod commands;
pub mod output;

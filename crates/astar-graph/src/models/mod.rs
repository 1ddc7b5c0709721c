//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`Graph`]: weighted adjacency structure with directed-pair weights
//! - [`Node`], [`Planar`]: bounds on node identifiers

pub mod graph;
pub mod node;

pub use graph::Graph;
pub use node::{Node, Planar};

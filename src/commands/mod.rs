//! CLI commands for graphlib

pub mod dispatch;
pub mod dump;
pub mod helpers;
pub mod mst;
pub mod path;
pub mod sort;

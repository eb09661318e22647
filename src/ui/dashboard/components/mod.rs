//! Dashboard UI components

pub mod footer;
pub mod header;
pub mod logs;
pub mod stats;
pub mod transactions;

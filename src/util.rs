//! Utility modules for textbayes.

pub mod sampling;

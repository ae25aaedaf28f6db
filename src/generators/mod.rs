//! Built-in graph constructors backing the selection registry.
//!
//! Random families take an explicit RNG so a fixed seed always yields the
//! same graph.

pub mod classic;
pub mod karate;
pub mod random;
pub mod school;

pub use classic::balanced_tree;
pub use karate::karate_club;
pub use random::{barabasi_albert, erdos_renyi, watts_strogatz};
pub use school::school;

//! # State Model
//!
//! The data side of the dialogue state: typed values, assignments of values
//! to variables, and the Bayesian network whose nodes hold the local
//! distributions. This crate does no inference; see `inference_core`.
//!
//! ## Components
//!
//! - **values**: Typed values and their string grammar
//! - **assignment**: Variable-to-value bindings with trimming, composition and containment
//! - **combinatorics**: Enumeration of all assignments over variable domains
//! - **distribs**: Probability and utility tables behind the node interfaces
//! - **network**: Chance, action and utility nodes in a directed acyclic graph

pub mod assignment;
pub mod combinatorics;
pub mod distribs;
pub mod error;
pub mod network;
pub mod values;

pub use assignment::*;
pub use combinatorics::*;
pub use distribs::*;
pub use error::*;
pub use network::*;
pub use values::*;

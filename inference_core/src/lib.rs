//! # Inference Core
//!
//! Answers queries over the dialogue state network built with
//! `state_model`, and turns utility rules into utility functions that the
//! network's utility nodes can hold.
//!
//! ## Core Components
//!
//! - **inference**: Exact probability, utility and reduction queries by enumeration
//! - **rules**: The contract of anchored rules (outputs, effects, conditions, templates)
//! - **rule_utility**: Utility distribution backed by a utility rule, with an optional cache
//! - **config**: Engine settings, loadable from TOML
//!
//! ## Example
//!
//! ```
//! use inference_core::{InferenceAlgorithm, NaiveInference, ProbQuery};
//! use state_model::{Assignment, BNetwork, CategoricalTable, ChanceNode};
//!
//! let rain = CategoricalTable::new()
//!     .with_row(Assignment::single("rain", true), 0.2)
//!     .with_row(Assignment::single("rain", false), 0.8);
//! let network = BNetwork::new().with_node(ChanceNode::new("rain", rain)).unwrap();
//!
//! let engine = NaiveInference::with_defaults();
//! let posterior = engine
//!     .query_prob(&ProbQuery::new(&network, ["rain"], Assignment::new()))
//!     .unwrap();
//! assert!((posterior.prob(&Assignment::single("rain", true)) - 0.2).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod inference;
pub mod rule_utility;
pub mod rules;

pub use config::*;
pub use error::*;
pub use inference::*;
pub use rule_utility::*;
pub use rules::*;

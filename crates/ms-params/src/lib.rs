//! # ms-params
//!
//! Search-space description trees for model selection.
//!
//! A tree of [`ParameterNode`]s describes which values each hyperparameter
//! may take and which components (kernels, metrics) are candidates for a
//! slot. [`enumerate`] expands the tree into every concrete [`Combination`],
//! each carrying its own configured component clones. Grid and random
//! cursors hand those combinations out in batches.

pub mod combination;
pub mod component;
pub mod config;
pub mod enumerate;
pub mod errors;
pub mod node;
pub mod print;
pub mod range;
pub mod search;

pub use combination::{Combination, ParameterValue};
pub use component::{ensure_bound, find_parameter, unbound, Component, ParameterKind, ParameterSpec};
pub use config::{SearchConfig, DEFAULT_SAMPLE_COUNT};
pub use enumerate::enumerate;
pub use errors::*;
pub use node::ParameterNode;
pub use print::{
    print_combination, print_combinations, print_parameters, print_tree, render_combination,
    render_tree, DiagnosticSink, StdoutSink, TracingSink,
};
pub use range::{RangeScale, ValueRange};
pub use search::{GridSearch, RandomSearch, SearchStrategy};

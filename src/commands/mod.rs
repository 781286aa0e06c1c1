//! Command implementations

pub mod filter;

pub use filter::{
    FilterArgError, FilterRequest, FilterResult, GreenPattern, OrangeSpec, apply_request,
    run_filter,
};

//! Progress reporting while a query is being analyzed

pub mod reporter;

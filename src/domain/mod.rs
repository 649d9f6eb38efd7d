// Domain layer - Core types and pipeline rules

pub mod errors;
pub mod model;
pub mod rules;

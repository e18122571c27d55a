pub mod batch;
pub mod listing;
pub mod posting;
pub mod query;

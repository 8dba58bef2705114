pub mod listing;
pub mod results;

pub mod activity;
pub mod exercises;
pub mod meals;
pub mod metrics;
pub mod reports;

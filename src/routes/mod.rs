pub mod exercises;
pub mod health;
pub mod home;
pub mod meals;
pub mod metrics;
pub mod reports;

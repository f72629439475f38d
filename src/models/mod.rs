pub mod exercise;
pub mod form;
pub mod meal;
pub mod report;

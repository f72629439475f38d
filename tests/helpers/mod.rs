pub mod axum_test;

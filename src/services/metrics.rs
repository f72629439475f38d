use lazy_static::lazy_static;
use prometheus::{register_counter, register_counter_vec, Counter, CounterVec};

lazy_static! {
    pub static ref MEALS_COUNTER: Counter = register_counter!(
        "healthlog_meals_logged_total",
        "Meals saved"
    ).unwrap();

    pub static ref EXERCISES_COUNTER: CounterVec = register_counter_vec!(
        "healthlog_exercises_logged_total",
        "Exercise sessions saved, by origin of the burned value",
        &["source"]
    ).unwrap();

    pub static ref FORM_REJECTIONS_COUNTER: CounterVec = register_counter_vec!(
        "healthlog_form_rejections_total",
        "Form submissions refused by validation",
        &["form", "reason"]
    ).unwrap();
}

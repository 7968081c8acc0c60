mod health;
mod metrics;

macros_utils::routes! {
    mod health,
    mod metrics,
}

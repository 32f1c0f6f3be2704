use expmaster_bot::experience::ledger::ExpLedger;
use sqlx::postgres::PgPoolOptions;

// connect_lazy performs no I/O, so the ledger can be constructed without a
// running database to exercise its in-process state.
fn lazy_ledger() -> ExpLedger {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/expmaster_test")
        .expect("lazy pool");
    ExpLedger::new(pool)
}

#[tokio::test]
async fn double_exp_starts_off() {
    let ledger = lazy_ledger();
    assert!(!ledger.double_exp_active());
}

#[tokio::test]
async fn toggle_flips_and_reports_the_new_state() {
    let ledger = lazy_ledger();
    assert!(ledger.toggle_double_exp());
    assert!(ledger.double_exp_active());
    assert!(!ledger.toggle_double_exp());
    assert!(!ledger.double_exp_active());
}

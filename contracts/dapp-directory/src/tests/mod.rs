
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod catalog_test;
    pub mod dapps_test;
    pub mod fees_test;
    pub mod ledger_test;
    pub mod purchase_test;
}

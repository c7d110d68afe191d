
// --- Unit Tests ---
pub mod unit {
    pub mod approval_test;
    pub mod ledger_test;
    pub mod listing_test;
    pub mod metadata_test;
    pub mod ownership_test;
    pub mod purchase_test;
    pub mod transfer_test;

    // --- View & event coverage ---
    pub mod enumeration_test;
    pub mod events_test;
}

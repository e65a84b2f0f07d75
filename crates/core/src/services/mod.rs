pub mod ledger_service;
pub mod stats_service;

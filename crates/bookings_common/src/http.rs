// --- File: crates/bookings_common/src/http.rs ---
pub mod client;

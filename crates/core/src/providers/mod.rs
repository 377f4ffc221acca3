pub mod traits;

// API provider implementations
pub mod flashfund;
pub mod nav_history;

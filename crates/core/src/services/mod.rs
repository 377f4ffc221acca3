pub mod aggregation_service;
pub mod chart_service;
pub mod discovery_service;
pub mod ingest_service;
pub mod nav_service;

// Application layer - Dataset loading and dashboard use cases
pub mod dashboard_service;
pub mod launch_source;
pub mod outcome_service;
pub mod scatter_service;
pub mod site_catalog;

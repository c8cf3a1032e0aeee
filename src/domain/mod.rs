// Domain layer - Launch records, selections and chart payloads
pub mod charts;
pub mod dataset;
pub mod error;
pub mod launch;
pub mod selection;

// Errors raised by dashboard operations

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error("Invalid payload range: low {low} is greater than high {high} or not finite")]
    InvalidRange { low: f64, high: f64 },
}

pub mod dashboard;

pub use dashboard::{dashboard_handler, DashboardResponseBody, DiseaseBucketDto};

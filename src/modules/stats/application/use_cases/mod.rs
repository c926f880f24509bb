pub mod dashboard_summary;

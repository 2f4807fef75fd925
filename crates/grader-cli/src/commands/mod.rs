pub mod analyze;
pub mod dispatch;
pub mod ingest;
pub mod problem;
pub mod prompt;
pub mod review;
pub mod shared;
pub mod tutor;

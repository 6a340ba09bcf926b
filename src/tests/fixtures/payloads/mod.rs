// Recorded-shape webhook bodies used by handler and end to end tests.

pub const WORKFLOW_RUN_COMPLETED: &str = include_str!("workflow_run_completed.json");
pub const CHECK_RUN_CREATED: &str = include_str!("check_run_created.json");

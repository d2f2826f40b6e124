pub mod evaluator;
pub mod history;
pub mod record;

pub use evaluator::{evaluate, evaluate_at};
pub use history::{merge_alerts, AlertHistory, ALERT_HISTORY_CAPACITY};
pub use record::{AlertRecord, Severity};

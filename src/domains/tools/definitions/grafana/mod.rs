//! Grafana alert source tools.

mod alert;

pub use alert::{Alert, GrafanaAlertParams, GrafanaAlertTool};

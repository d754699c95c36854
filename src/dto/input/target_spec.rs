use serde::Deserialize;
use uuid::Uuid;

///
/// Declarative description of which users should receive a notification.
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(
    tag = "target_type",
    content = "target_value",
    rename_all = "snake_case"
)]
pub enum TargetSpec {
    All,
    Region(String),
    Role(String),
    UserIds(Vec<Uuid>),
}

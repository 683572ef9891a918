//! Domain model for board tasks.

mod error;
mod ids;
mod status;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskContent, TaskEdit};

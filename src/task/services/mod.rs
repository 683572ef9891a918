//! Application services for board tasks.

mod error;
mod manager;

pub use error::{TaskServiceError, TaskServiceResult};
pub use manager::{EditTaskRequest, NewTaskRequest, TaskService, TaskView};

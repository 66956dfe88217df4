mod command;
mod model;

pub use command::{parse_export, TaskCommand, DEFAULT_TASK_PROGRAM};
pub use model::{parse_timestamp, Task};

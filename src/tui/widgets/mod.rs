mod help_footer;
mod help_popup;
mod task_table;

pub use help_footer::render_help_footer;
pub use help_popup::render_help_popup;
pub use task_table::render_task_table;

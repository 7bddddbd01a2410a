mod filter_bar;
mod filter_button;
mod list_footer;
mod task_entry;
mod task_list;
mod task_list_row;
mod task_title_editor;

pub use filter_bar::FilterBar;
pub use filter_button::FilterButton;
pub use list_footer::ListFooter;
pub use task_entry::TaskEntry;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use task_title_editor::TaskTitleEditor;

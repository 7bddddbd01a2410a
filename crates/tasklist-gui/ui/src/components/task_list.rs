use tasklist_core::{
  EditOutcome,
  RowView
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:           Vec<RowView>,
  pub on_set_done:
    Callback<(String, bool)>,
  pub on_start_edit:  Callback<String>,
  pub on_finish_edit: Callback<EditOutcome>,
  pub on_remove:      Callback<String>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  if props.rows.is_empty() {
    return html! {
        <div class="empty">{ "No tasks" }</div>
    };
  }

  html! {
      <ul class="task-list">
          {
              for props.rows.iter().cloned().map(|row| {
                  let key = row.id.clone();
                  html! {
                      <TaskListRow
                          key={key}
                          row={row}
                          on_set_done={props.on_set_done.clone()}
                          on_start_edit={props.on_start_edit.clone()}
                          on_finish_edit={props.on_finish_edit.clone()}
                          on_remove={props.on_remove.clone()}
                      />
                  }
              })
          }
      </ul>
  }
}

use tasklist_core::{
  EditOutcome,
  RowView
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Event,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

use super::TaskTitleEditor;

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:            RowView,
  pub on_set_done:
    Callback<(String, bool)>,
  pub on_start_edit:  Callback<String>,
  pub on_finish_edit: Callback<EditOutcome>,
  pub on_remove:      Callback<String>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let row = &props.row;

  let on_toggle = {
    let id = row.id.clone();
    let on_set_done =
      props.on_set_done.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_set_done
        .emit((id.clone(), input.checked()));
    })
  };

  let on_edit_click = {
    let id = row.id.clone();
    let on_start_edit =
      props.on_start_edit.clone();
    Callback::from(move |_: MouseEvent| {
      on_start_edit.emit(id.clone())
    })
  };

  let on_title_dblclick = {
    let id = row.id.clone();
    let on_start_edit =
      props.on_start_edit.clone();
    Callback::from(move |_: MouseEvent| {
      on_start_edit.emit(id.clone())
    })
  };

  let on_delete_click = {
    let id = row.id.clone();
    let on_remove = props.on_remove.clone();
    Callback::from(move |_: MouseEvent| {
      on_remove.emit(id.clone())
    })
  };

  let title = if row.editing {
    html! {
        <TaskTitleEditor
            id={row.id.clone()}
            title={row.title.clone()}
            on_finish={props.on_finish_edit.clone()}
        />
    }
  } else {
    html! {
        <div
            class="task-title"
            title={row.title.clone()}
            ondblclick={on_title_dblclick}
        >
            { &row.title }
        </div>
    }
  };

  html! {
      <li class={classes!("task-item", row.done.then_some("done"))} data-id={row.id.clone()}>
          <div class="task-left">
              <input
                  type="checkbox"
                  aria-label="Completed"
                  checked={row.done}
                  onchange={on_toggle}
              />
          </div>
          { title }
          <div class="task-actions">
              <button class="icon-btn" title="Edit" aria-label="Edit" onclick={on_edit_click}>{ "🖊" }</button>
              <button class="icon-btn" title="Delete" aria-label="Delete" onclick={on_delete_click}>{ "🗑" }</button>
          </div>
      </li>
  }
}

use web_sys::{
  HtmlInputElement,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

#[derive(Properties, PartialEq)]
pub struct TaskEntryProps {
  pub placeholder: String,
  pub autofocus:   bool,
  /// Returns whether a task was added;
  /// the field is only cleared then.
  pub on_add:      Callback<String, bool>
}

#[function_component(TaskEntry)]
pub fn task_entry(
  props: &TaskEntryProps
) -> Html {
  let input_ref = use_node_ref();

  {
    let input_ref = input_ref.clone();
    let autofocus = props.autofocus;
    use_effect_with((), move |_| {
      if autofocus
        && has_fine_pointer()
        && let Some(input) =
          input_ref
            .cast::<HtmlInputElement>()
      {
        if let Err(error) = input.focus() {
          tracing::debug!(
            ?error,
            "entry field refused focus"
          );
        }
      }
    });
  }

  let submit = {
    let input_ref = input_ref.clone();
    let on_add = props.on_add.clone();
    Callback::from(move |()| {
      let Some(input) = input_ref
        .cast::<HtmlInputElement>()
      else {
        return;
      };
      let draft = input.value();
      let added = on_add.emit(draft.clone());
      if let Some(next) =
        entry_value_after_submit(&draft, added)
      {
        input.set_value(next);
      }
    })
  };

  let on_keydown = {
    let submit = submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter"
          && !e.is_composing()
        {
          submit.emit(());
        }
      }
    )
  };

  let on_click = Callback::from(
    move |_: MouseEvent| {
      submit.emit(())
    }
  );

  html! {
      <div class="entry">
          <input
              ref={input_ref}
              type="text"
              aria-label="New task"
              placeholder={props.placeholder.clone()}
              onkeydown={on_keydown}
          />
          <button class="btn primary" onclick={on_click}>{ "Add" }</button>
      </div>
  }
}

/// Touch devices skip autofocus so the
/// on-screen keyboard stays closed.
fn has_fine_pointer() -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .match_media("(pointer: fine)")
        .ok()
        .flatten()
    })
    .is_some_and(|query| query.matches())
}

/// What the entry field should show after a
/// submit, or `None` to leave it alone. A
/// rejected (blank) entry keeps its text.
fn entry_value_after_submit(
  draft: &str,
  added: bool
) -> Option<&'static str> {
  (added && !draft.trim().is_empty())
    .then_some("")
}

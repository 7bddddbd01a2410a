use tasklist_core::{
  EditOutcome,
  EditSession
};
use web_sys::{
  FocusEvent,
  HtmlInputElement,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_node_ref
};

#[derive(Properties, PartialEq)]
pub struct TaskTitleEditorProps {
  pub id:        String,
  pub title:     String,
  pub on_finish: Callback<EditOutcome>
}

/// Inline title input. Enter and blur
/// commit, Escape cancels; whichever comes
/// first wins.
#[function_component(TaskTitleEditor)]
pub fn task_title_editor(
  props: &TaskTitleEditorProps
) -> Html {
  let input_ref = use_node_ref();
  let session = {
    let id = props.id.clone();
    use_mut_ref(move || EditSession::new(id))
  };

  {
    let input_ref = input_ref.clone();
    use_effect_with((), move |_| {
      if let Some(input) =
        input_ref.cast::<HtmlInputElement>()
      {
        if let Err(error) = input.focus() {
          tracing::debug!(
            ?error,
            "edit input refused focus"
          );
        }
        let end = caret_end(&input.value());
        if let Err(error) =
          input.set_selection_range(end, end)
        {
          tracing::debug!(
            ?error,
            "failed placing caret at end of \
             edit input"
          );
        }
      }
    });
  }

  let finish = {
    let input_ref = input_ref.clone();
    let on_finish = props.on_finish.clone();
    Callback::from(move |commit: bool| {
      let draft = input_ref
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default();
      let outcome = {
        let mut session =
          session.borrow_mut();
        if commit {
          session.commit(&draft)
        } else {
          session.cancel()
        }
      };
      if let Some(outcome) = outcome {
        on_finish.emit(outcome);
      }
    })
  };

  let on_keydown = {
    let finish = finish.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.is_composing() {
          return;
        }
        match e.key().as_str() {
          | "Enter" => finish.emit(true),
          | "Escape" => finish.emit(false),
          | _ => {}
        }
      }
    )
  };

  let on_blur = Callback::from(
    move |_: FocusEvent| finish.emit(true)
  );

  html! {
      <input
          ref={input_ref}
          type="text"
          class="edit-input"
          aria-label="Edit task title"
          value={props.title.clone()}
          onkeydown={on_keydown}
          onblur={on_blur}
      />
  }
}

/// DOM selection offsets count UTF-16 code
/// units.
fn caret_end(value: &str) -> u32 {
  value.encode_utf16().count() as u32
}

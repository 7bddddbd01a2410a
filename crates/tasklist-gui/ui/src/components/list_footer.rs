use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ListFooterProps {
  pub remaining:          usize,
  pub has_done:           bool,
  pub on_clear_completed:
    Callback<MouseEvent>
}

#[function_component(ListFooter)]
pub fn list_footer(
  props: &ListFooterProps
) -> Html {
  html! {
      <div class="footer">
          <span>
              <strong>{ props.remaining.to_string() }</strong>
              { " left" }
          </span>
          <button
              class="btn danger"
              title={if props.has_done { "Delete completed tasks" } else { "No completed tasks" }}
              onclick={props.on_clear_completed.clone()}
          >
              { "Clear completed" }
          </button>
      </div>
  }
}

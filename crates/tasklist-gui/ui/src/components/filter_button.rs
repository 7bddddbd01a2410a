use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterButtonProps {
  pub label:     String,
  pub is_active: bool,
  pub onclick:   Callback<MouseEvent>
}

#[function_component(FilterButton)]
pub fn filter_button(
  props: &FilterButtonProps
) -> Html {
  html! {
      <button
          class={if props.is_active { "btn filter-btn active" } else { "btn filter-btn" }}
          role="tab"
          aria-selected={props.is_active.to_string()}
          onclick={props.onclick.clone()}
      >
          { props.label.clone() }
      </button>
  }
}

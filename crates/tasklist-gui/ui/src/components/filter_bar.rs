use tasklist_core::FilterMode;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::FilterButton;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub active:    FilterMode,
  pub on_select: Callback<FilterMode>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  html! {
      <div class="filters" role="tablist">
          {
              for FilterMode::ALL_MODES.into_iter().map(|mode| {
                  let on_select = props.on_select.clone();
                  html! {
                      <FilterButton
                          key={mode.as_key()}
                          label={mode.label()}
                          is_active={props.active == mode}
                          onclick={Callback::from(move |_: MouseEvent| on_select.emit(mode))}
                      />
                  }
              })
          }
      </div>
  }
}

mod actions;
mod storage;

use tasklist_core::{
  AppConfig,
  EditOutcome,
  FilterMode,
  ListView,
  TaskStore
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  UseStateHandle,
  function_component,
  html,
  use_memo,
  use_mut_ref,
  use_state
};

use self::actions::{
  add_from_entry,
  clear_completed_confirmed,
  settle
};
use self::storage::LocalStorageSlot;
use crate::components::{
  FilterBar,
  ListFooter,
  TaskEntry,
  TaskList
};

const APP_CONFIG_TOML: &str =
  include_str!("../assets/app.toml");

fn bump(refresh_tick: &UseStateHandle<u64>) {
  refresh_tick
    .set((**refresh_tick).saturating_add(1));
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    AppConfig::load_or_default(
      APP_CONFIG_TOML
    )
  });
  let store = {
    let key = config.storage_key.clone();
    use_mut_ref(move || {
      TaskStore::open(LocalStorageSlot::new(
        key
      ))
    })
  };
  let filter = use_state(FilterMode::default);
  let editing =
    use_state(|| None::<String>);
  // Keys the list so every change rebuilds
  // it instead of patching rows in place.
  let refresh_tick = use_state(|| 0_u64);

  let on_add = {
    let store = store.clone();
    let refresh_tick = refresh_tick.clone();
    Callback::from(move |title: String| {
      let changed = add_from_entry(
        &mut *store.borrow_mut(),
        &title
      );
      if changed {
        bump(&refresh_tick);
      }
      changed
    })
  };

  let on_set_done = {
    let store = store.clone();
    let refresh_tick = refresh_tick.clone();
    Callback::from(
      move |(id, done): (String, bool)| {
        let result = store
          .borrow_mut()
          .set_done(&id, done);
        settle(result, "set_done");
        bump(&refresh_tick);
      }
    )
  };

  let on_start_edit = {
    let editing = editing.clone();
    Callback::from(move |id: String| {
      editing.set(Some(id))
    })
  };

  let on_finish_edit = {
    let store = store.clone();
    let editing = editing.clone();
    let refresh_tick = refresh_tick.clone();
    Callback::from(
      move |outcome: EditOutcome| {
        if let EditOutcome::Commit {
          id,
          title
        } = outcome
        {
          let result = store
            .borrow_mut()
            .rename(&id, &title);
          settle(result, "rename");
        }
        editing.set(None);
        bump(&refresh_tick);
      }
    )
  };

  let on_remove = {
    let store = store.clone();
    let editing = editing.clone();
    let refresh_tick = refresh_tick.clone();
    Callback::from(move |id: String| {
      let result =
        store.borrow_mut().remove(&id);
      if settle(result, "remove") {
        if editing.as_deref()
          == Some(id.as_str())
        {
          editing.set(None);
        }
        bump(&refresh_tick);
      }
    })
  };

  let on_clear_completed = {
    let store = store.clone();
    let config = config.clone();
    let refresh_tick = refresh_tick.clone();
    Callback::from(move |_: MouseEvent| {
      let cleared = clear_completed_confirmed(
        &mut *store.borrow_mut(),
        || {
          gloo::dialogs::confirm(
            &config.confirm_clear_message
          )
        }
      );
      if cleared {
        bump(&refresh_tick);
      }
    })
  };

  let on_select_filter = {
    let filter = filter.clone();
    let refresh_tick = refresh_tick.clone();
    Callback::from(move |mode: FilterMode| {
      tracing::debug!(
        filter = mode.as_key(),
        "switching filter"
      );
      filter.set(mode);
      bump(&refresh_tick);
    })
  };

  let view = {
    let store = store.borrow();
    ListView::build(
      store.tasks(),
      *filter,
      editing.as_deref()
    )
  };

  html! {
      <div class="app">
          <h1>{ "Tasks" }</h1>
          <TaskEntry
              placeholder={config.entry_placeholder.clone()}
              autofocus={config.autofocus_on_fine_pointer}
              on_add={on_add}
          />
          <FilterBar active={view.mode} on_select={on_select_filter} />
          <TaskList
              key={refresh_tick.to_string()}
              rows={view.rows}
              on_set_done={on_set_done}
              on_start_edit={on_start_edit}
              on_finish_edit={on_finish_edit}
              on_remove={on_remove}
          />
          <ListFooter
              remaining={view.remaining}
              has_done={view.has_done}
              on_clear_completed={on_clear_completed}
          />
      </div>
  }
}

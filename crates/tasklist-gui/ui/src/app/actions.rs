use tasklist_core::{
  StorageSlot,
  TaskStore
};

/// Logs a failed write and reports
/// whether the in-memory list changed.
/// Store operations only fail after the
/// change has been applied in memory.
pub fn settle(
  result: anyhow::Result<bool>,
  action: &'static str
) -> bool {
  match result {
    | Ok(changed) => changed,
    | Err(error) => {
      tracing::error!(
        action,
        error = %format!("{error:#}"),
        "failed persisting task list"
      );
      true
    }
  }
}

/// Adds the entry text. `true` means a task
/// now exists for it and the entry field
/// can be cleared.
pub fn add_from_entry<S: StorageSlot>(
  store: &mut TaskStore<S>,
  draft: &str
) -> bool {
  settle(store.add(draft), "add")
}

/// Clears done tasks after `confirm`
/// accepts. Nothing done means nothing to
/// ask, so `confirm` is not called.
pub fn clear_completed_confirmed<
  S: StorageSlot
>(
  store: &mut TaskStore<S>,
  confirm: impl FnOnce() -> bool
) -> bool {
  if !store.has_completed() {
    return false;
  }
  if !confirm() {
    tracing::debug!(
      "clear completed declined"
    );
    return false;
  }
  settle(
    store.clear_completed(),
    "clear_completed"
  )
}

#[cfg(test)]
mod actions_tests {
  use std::cell::Cell;

  use tasklist_core::MemorySlot;

  use super::*;

  fn store_with(
    titles: &[&str]
  ) -> TaskStore<MemorySlot> {
    let mut store =
      TaskStore::open(MemorySlot::new());
    for title in titles {
      store.add(title).expect("add");
    }
    store
  }

  #[test]
  fn clear_without_done_tasks_never_asks() {
    let mut store = store_with(&["A", "B"]);
    let before = store.slot().value().map(str::to_string);
    let asked = Cell::new(false);

    let cleared = clear_completed_confirmed(
      &mut store,
      || {
        asked.set(true);
        true
      }
    );

    assert!(!cleared);
    assert!(!asked.get());
    assert_eq!(store.tasks().len(), 2);
    assert_eq!(
      store.slot().value().map(str::to_string),
      before
    );
  }

  #[test]
  fn declined_confirm_keeps_done_tasks() {
    let mut store = store_with(&["A", "B"]);
    let id = store.tasks()[0].id.clone();
    store.toggle_done(&id).expect("toggle");

    assert!(!clear_completed_confirmed(
      &mut store,
      || false
    ));
    assert_eq!(store.tasks().len(), 2);
  }

  #[test]
  fn accepted_confirm_removes_done_tasks() {
    let mut store = store_with(&["A", "B"]);
    let id = store.tasks()[0].id.clone();
    store.toggle_done(&id).expect("toggle");

    assert!(clear_completed_confirmed(
      &mut store,
      || true
    ));
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].title, "A");
  }

  #[test]
  fn blank_entry_is_not_added() {
    let mut store = store_with(&[]);
    assert!(!add_from_entry(&mut store, "  "));
    assert!(store.tasks().is_empty());
    assert_eq!(store.slot().value(), None);
  }

  #[test]
  fn entry_text_is_added() {
    let mut store = store_with(&[]);
    assert!(add_from_entry(&mut store, " milk "));
    assert_eq!(store.tasks()[0].title, "milk");
  }

  #[test]
  fn failed_write_still_reports_added() {
    let mut store = TaskStore::open(
      MemorySlot::new().failing_writes()
    );
    assert!(add_from_entry(&mut store, "milk"));
    assert_eq!(store.tasks().len(), 1);
  }
}

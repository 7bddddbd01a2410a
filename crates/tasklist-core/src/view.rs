use crate::filter::{
  FilterMode,
  apply_filter,
  remaining_count
};
use crate::task::Task;

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
  pub id:      String,
  pub title:   String,
  pub done:    bool,
  pub editing: bool
}

/// Everything the page shows for one
/// state: rebuilt whole after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
  pub mode:      FilterMode,
  pub rows:      Vec<RowView>,
  pub remaining: usize,
  pub has_done:  bool
}

impl ListView {
  pub fn build(
    tasks: &[Task],
    mode: FilterMode,
    editing: Option<&str>
  ) -> Self {
    let rows = apply_filter(tasks, mode)
      .into_iter()
      .map(|task| RowView {
        id:      task.id.clone(),
        title:   task.title.clone(),
        done:    task.done,
        editing: editing
          == Some(task.id.as_str())
      })
      .collect();

    Self {
      mode,
      rows,
      remaining: remaining_count(tasks),
      has_done: tasks
        .iter()
        .any(|task| task.done)
    }
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }
}

/// Outcome of leaving an inline edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
  Commit { id: String, title: String },
  Cancel
}

/// One inline edit. It finishes at most
/// once: a blur arriving after Enter or
/// Escape is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
  id:       String,
  finished: bool
}

impl EditSession {
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      id:       id.into(),
      finished: false
    }
  }

  pub fn commit(
    &mut self,
    draft: &str
  ) -> Option<EditOutcome> {
    if self.finished {
      return None;
    }
    self.finished = true;
    Some(EditOutcome::Commit {
      id:    self.id.clone(),
      title: draft.to_string()
    })
  }

  pub fn cancel(
    &mut self
  ) -> Option<EditOutcome> {
    if self.finished {
      return None;
    }
    self.finished = true;
    Some(EditOutcome::Cancel)
  }
}

#[cfg(test)]
mod view_tests {
  use super::*;

  fn task(id: &str, done: bool) -> Task {
    Task {
      id: id.to_string(),
      title: format!("task {id}"),
      done,
      created_at: 0
    }
  }

  #[test]
  fn remaining_counts_full_list_under_any_filter()
  {
    let tasks = vec![
      task("c", false),
      task("b", true),
      task("a", false),
    ];
    for mode in FilterMode::ALL_MODES {
      let view =
        ListView::build(&tasks, mode, None);
      assert_eq!(view.remaining, 2);
      assert!(view.has_done);
    }
    let done =
      ListView::build(&tasks, FilterMode::Done, None);
    assert_eq!(done.rows.len(), 1);
    assert_eq!(done.rows[0].id, "b");
  }

  #[test]
  fn only_the_edited_row_is_in_edit_mode() {
    let tasks =
      vec![task("b", false), task("a", false)];
    let view = ListView::build(
      &tasks,
      FilterMode::All,
      Some("a")
    );
    assert!(!view.rows[0].editing);
    assert!(view.rows[1].editing);
  }

  #[test]
  fn edit_session_finishes_once() {
    let mut session = EditSession::new("a");
    assert_eq!(
      session.commit("new"),
      Some(EditOutcome::Commit {
        id:    "a".to_string(),
        title: "new".to_string()
      })
    );
    assert_eq!(session.commit("again"), None);
    assert_eq!(session.cancel(), None);

    let mut cancelled = EditSession::new("a");
    assert_eq!(
      cancelled.cancel(),
      Some(EditOutcome::Cancel)
    );
    assert_eq!(cancelled.commit("late"), None);
  }
}

use tracing::{
  debug,
  info
};

use crate::filter::{
  FilterMode,
  apply_filter,
  remaining_count
};
use crate::storage::{
  self,
  StorageSlot
};
use crate::task::{
  Task,
  now_millis
};

/// The authoritative, newest-first task
/// list together with the slot it is
/// mirrored into.
///
/// Every mutating operation returns
/// `Ok(true)` when it changed the list (the
/// new list is persisted before
/// returning), `Ok(false)` for a no-op (no
/// write happens), and `Err` only when the
/// slot rejects the write. A failed write
/// leaves the in-memory change in place.
#[derive(Debug)]
pub struct TaskStore<S: StorageSlot> {
  tasks: Vec<Task>,
  slot:  S
}

impl<S: StorageSlot> TaskStore<S> {
  #[tracing::instrument(skip_all)]
  pub fn open(slot: S) -> Self {
    let tasks = storage::load(&slot);
    info!(
      count = tasks.len(),
      "opened task store"
    );
    Self { tasks, slot }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn get(
    &self,
    id: &str
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn slot(&self) -> &S {
    &self.slot
  }

  pub fn has_completed(&self) -> bool {
    self.tasks.iter().any(|task| task.done)
  }

  pub fn remaining_count(&self) -> usize {
    remaining_count(&self.tasks)
  }

  pub fn visible(
    &self,
    mode: FilterMode
  ) -> Vec<&Task> {
    apply_filter(&self.tasks, mode)
  }

  #[tracing::instrument(skip(self))]
  pub fn add(
    &mut self,
    title: &str
  ) -> anyhow::Result<bool> {
    let title = title.trim();
    if title.is_empty() {
      debug!("ignoring empty title");
      return Ok(false);
    }

    let task = Task::new(
      title.to_string(),
      now_millis()
    );
    debug!(id = %task.id, "adding task");
    self.tasks.insert(0, task);
    self.persist()?;
    Ok(true)
  }

  #[tracing::instrument(skip(self, new_title))]
  pub fn rename(
    &mut self,
    id: &str,
    new_title: &str
  ) -> anyhow::Result<bool> {
    let new_title = new_title.trim();
    if new_title.is_empty() {
      debug!(
        "discarding empty rename"
      );
      return Ok(false);
    }

    let Some(task) = self.find_mut(id)
    else {
      debug!("rename of unknown task");
      return Ok(false);
    };
    task.title = new_title.to_string();
    self.persist()?;
    Ok(true)
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle_done(
    &mut self,
    id: &str
  ) -> anyhow::Result<bool> {
    let Some(task) = self.find_mut(id)
    else {
      debug!("toggle of unknown task");
      return Ok(false);
    };
    task.done = !task.done;
    self.persist()?;
    Ok(true)
  }

  /// Checkbox flavour of `toggle_done`:
  /// the row reports the state it now
  /// shows.
  #[tracing::instrument(skip(self))]
  pub fn set_done(
    &mut self,
    id: &str,
    done: bool
  ) -> anyhow::Result<bool> {
    let Some(task) = self.find_mut(id)
    else {
      debug!("update of unknown task");
      return Ok(false);
    };
    task.done = done;
    self.persist()?;
    Ok(true)
  }

  #[tracing::instrument(skip(self))]
  pub fn remove(
    &mut self,
    id: &str
  ) -> anyhow::Result<bool> {
    let before = self.tasks.len();
    self.tasks.retain(|task| task.id != id);
    if self.tasks.len() == before {
      debug!("remove of unknown task");
      return Ok(false);
    }
    self.persist()?;
    Ok(true)
  }

  #[tracing::instrument(skip(self))]
  pub fn clear_completed(
    &mut self
  ) -> anyhow::Result<bool> {
    if !self.has_completed() {
      return Ok(false);
    }
    let before = self.tasks.len();
    self.tasks.retain(|task| !task.done);
    debug!(
      removed = before - self.tasks.len(),
      "cleared completed tasks"
    );
    self.persist()?;
    Ok(true)
  }

  fn find_mut(
    &mut self,
    id: &str
  ) -> Option<&mut Task> {
    self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
  }

  fn persist(
    &mut self
  ) -> anyhow::Result<()> {
    storage::save(
      &mut self.slot,
      &self.tasks
    )
  }
}

use crate::task::Task;

/// Which slice of the list is on screen.
/// Lives only in memory; every page load
/// starts at `All`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum FilterMode {
  #[default]
  All,
  Active,
  Done
}

impl FilterMode {
  pub const ALL_MODES: [FilterMode; 3] = [
    FilterMode::All,
    FilterMode::Active,
    FilterMode::Done
  ];

  /// Unknown keys fall back to `All`.
  pub fn from_key(key: &str) -> Self {
    match key {
      | "active" => FilterMode::Active,
      | "done" => FilterMode::Done,
      | _ => FilterMode::All
    }
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | FilterMode::All => "all",
      | FilterMode::Active => "active",
      | FilterMode::Done => "done"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | FilterMode::All => "All",
      | FilterMode::Active => "Active",
      | FilterMode::Done => "Done"
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | FilterMode::All => true,
      | FilterMode::Active => !task.done,
      | FilterMode::Done => task.done
    }
  }
}

pub fn apply_filter(
  tasks: &[Task],
  mode: FilterMode
) -> Vec<&Task> {
  tasks
    .iter()
    .filter(|task| mode.matches(task))
    .collect()
}

/// Not-done tasks across the whole list,
/// whatever filter is selected.
pub fn remaining_count(
  tasks: &[Task]
) -> usize {
  tasks
    .iter()
    .filter(|task| !task.done)
    .count()
}

use anyhow::{
  Context,
  anyhow
};
use tracing::{
  debug,
  warn
};

use crate::task::Task;

/// One named key/value cell holding the
/// serialized task list. Implementations
/// own the key.
pub trait StorageSlot {
  fn read(
    &self
  ) -> anyhow::Result<Option<String>>;

  fn write(
    &mut self,
    value: &str
  ) -> anyhow::Result<()>;
}

/// In-process slot used by tests and by
/// hosts without browser storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
  value:       Option<String>,
  fail_writes: bool
}

impl MemorySlot {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_value(
    value: impl Into<String>
  ) -> Self {
    Self {
      value:       Some(value.into()),
      fail_writes: false
    }
  }

  /// Every subsequent write fails, like a
  /// full or disabled browser storage.
  pub fn failing_writes(
    mut self
  ) -> Self {
    self.fail_writes = true;
    self
  }

  pub fn value(&self) -> Option<&str> {
    self.value.as_deref()
  }
}

impl StorageSlot for MemorySlot {
  fn read(
    &self
  ) -> anyhow::Result<Option<String>> {
    Ok(self.value.clone())
  }

  fn write(
    &mut self,
    value: &str
  ) -> anyhow::Result<()> {
    if self.fail_writes {
      return Err(anyhow!(
        "storage quota exceeded"
      ));
    }
    self.value = Some(value.to_string());
    Ok(())
  }
}

#[tracing::instrument(skip_all, fields(count = tasks.len()))]
pub fn save<S: StorageSlot>(
  slot: &mut S,
  tasks: &[Task]
) -> anyhow::Result<()> {
  let json = serde_json::to_string(tasks)
    .context(
      "failed to serialize task list"
    )?;
  slot.write(&json).context(
    "failed to write task list to \
     storage"
  )?;
  debug!(
    bytes = json.len(),
    "persisted task list"
  );
  Ok(())
}

/// Reads the slot. Anything missing or not
/// a JSON array loads as an empty list;
/// inside an array, records that do not
/// parse are dropped and the rest are kept.
#[tracing::instrument(skip_all)]
pub fn load<S: StorageSlot>(
  slot: &S
) -> Vec<Task> {
  let raw = match slot.read() {
    | Ok(Some(raw)) => raw,
    | Ok(None) => {
      debug!(
        "no stored task list; starting \
         empty"
      );
      return Vec::new();
    }
    | Err(error) => {
      warn!(
        %error,
        "failed reading task list from \
         storage; starting empty"
      );
      return Vec::new();
    }
  };

  if raw.trim().is_empty() {
    return Vec::new();
  }

  let records = match serde_json::from_str::<
    Vec<serde_json::Value>
  >(&raw)
  {
    | Ok(records) => records,
    | Err(error) => {
      warn!(
        %error,
        "stored task list is corrupt; \
         starting empty"
      );
      return Vec::new();
    }
  };

  let total = records.len();
  let tasks: Vec<Task> = records
    .into_iter()
    .enumerate()
    .filter_map(|(index, record)| {
      match serde_json::from_value::<Task>(
        record
      ) {
        | Ok(task) => Some(task),
        | Err(error) => {
          warn!(
            index,
            %error,
            "skipping malformed stored task"
          );
          None
        }
      }
    })
    .collect();

  debug!(
    count = tasks.len(),
    skipped = total - tasks.len(),
    "loaded task list"
  );
  tasks
}

#[cfg(test)]
mod storage_tests {
  use super::*;

  fn task(
    id: &str,
    title: &str,
    done: bool
  ) -> Task {
    Task {
      id: id.to_string(),
      title: title.to_string(),
      done,
      created_at: 1_700_000_000_000
    }
  }

  #[test]
  fn save_then_load_preserves_order_and_fields()
  {
    let tasks = vec![
      task("b", "Second", true),
      task("a", "First", false),
    ];
    let mut slot = MemorySlot::new();
    save(&mut slot, &tasks)
      .expect("save");
    assert_eq!(load(&slot), tasks);
  }

  #[test]
  fn save_overwrites_previous_value() {
    let mut slot = MemorySlot::new();
    save(&mut slot, &[task("a", "A", false)])
      .expect("first save");
    save(&mut slot, &[]).expect("second save");
    assert_eq!(slot.value(), Some("[]"));
    assert!(load(&slot).is_empty());
  }

  #[test]
  fn absent_value_loads_empty() {
    assert!(load(&MemorySlot::new()).is_empty());
  }

  #[test]
  fn corrupt_values_load_empty() {
    for raw in [
      "",
      "not json",
      "{\"id\":\"a\"}",
      "42",
      "null",
      "\"[]\"",
    ] {
      let slot = MemorySlot::with_value(raw);
      assert!(
        load(&slot).is_empty(),
        "expected empty list for {raw:?}"
      );
    }
  }

  #[test]
  fn malformed_records_are_dropped_and_siblings_kept()
  {
    let slot = MemorySlot::with_value(
      r#"[
        {"id":"a","title":"A","done":false,"createdAt":1700000000000},
        {"id":"b","title":"B","done":true},
        {"id":"c","title":"C","done":true,"createdAt":1700000000000},
        {"id":"d","title":"D","done":false,"createdAt":1.5},
        {"id":1},
        "text"
      ]"#
    );
    assert_eq!(
      load(&slot),
      vec![task("a", "A", false), task("c", "C", true)]
    );
  }

  #[test]
  fn array_of_only_bad_records_loads_empty() {
    let slot = MemorySlot::with_value(
      r#"[{"id":1},{"id":"a","title":"A"}]"#
    );
    assert!(load(&slot).is_empty());
  }

  #[test]
  fn reads_payload_written_by_hand() {
    let slot = MemorySlot::with_value(
      r#"[{"id":"lq1-9z","title":"Water plants","done":true,"createdAt":1700000000000}]"#
    );
    assert_eq!(
      load(&slot),
      vec![task("lq1-9z", "Water plants", true)]
    );
  }

  #[test]
  fn write_failure_surfaces_as_error() {
    let mut slot =
      MemorySlot::new().failing_writes();
    let error = save(&mut slot, &[])
      .expect_err("write should fail");
    assert!(
      format!("{error:#}")
        .contains("quota exceeded")
    );
  }
}

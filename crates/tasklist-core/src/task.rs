use chrono::Utc;
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

/// A single to-do entry as it lives in
/// memory and in the persisted slot.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  pub id:         String,
  pub title:      String,
  pub done:       bool,
  pub created_at: i64
}

impl Task {
  /// Builds a fresh, not-done task.
  /// The caller is responsible for
  /// passing an already trimmed,
  /// non-empty title.
  pub fn new(
    title: String,
    created_at: i64
  ) -> Self {
    Self {
      id: new_task_id(created_at),
      title,
      done: false,
      created_at
    }
  }
}

pub fn now_millis() -> i64 {
  Utc::now().timestamp_millis()
}

/// `<base36 millis>-<base36 random>`.
pub fn new_task_id(
  created_at: i64
) -> String {
  let suffix =
    Uuid::new_v4().as_u128() as u32;
  format!(
    "{}-{}",
    to_base36(created_at.max(0) as u64),
    to_base36(u64::from(suffix))
  )
}

fn to_base36(mut value: u64) -> String {
  const DIGITS: &[u8; 36] =
    b"0123456789abcdefghijklmnopqrstuvwxyz";

  if value == 0 {
    return "0".to_string();
  }

  let mut out = Vec::new();
  while value > 0 {
    out.push(
      DIGITS[(value % 36) as usize]
    );
    value /= 36;
  }
  out.reverse();
  String::from_utf8_lossy(&out)
    .into_owned()
}

#[cfg(test)]
mod task_tests {
  use super::*;

  #[test]
  fn base36_matches_known_values() {
    assert_eq!(to_base36(0), "0");
    assert_eq!(to_base36(35), "z");
    assert_eq!(to_base36(36), "10");
    assert_eq!(
      to_base36(1_700_000_000_000),
      "loyw3v28"
    );
  }

  #[test]
  fn ids_carry_time_prefix_and_differ() {
    let a = new_task_id(36);
    let b = new_task_id(36);
    assert!(a.starts_with("10-"));
    assert!(b.starts_with("10-"));
    assert_ne!(a, b);
  }

  #[test]
  fn serializes_with_camel_case_created_at()
  {
    let task = Task {
      id:         "abc-1".to_string(),
      title:      "Buy milk".to_string(),
      done:       false,
      created_at: 42
    };
    let json =
      serde_json::to_value(&task)
        .expect("serialize");
    assert_eq!(
      json,
      serde_json::json!({
        "id": "abc-1",
        "title": "Buy milk",
        "done": false,
        "createdAt": 42
      })
    );
  }
}

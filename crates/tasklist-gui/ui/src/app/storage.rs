use anyhow::anyhow;
use tasklist_core::StorageSlot;
use wasm_bindgen::JsValue;

/// `window.localStorage[key]`.
#[derive(Debug, Clone)]
pub struct LocalStorageSlot {
  key: String
}

impl LocalStorageSlot {
  pub fn new(key: impl Into<String>) -> Self {
    Self { key: key.into() }
  }

  fn storage(
    &self
  ) -> anyhow::Result<web_sys::Storage> {
    web_sys::window()
      .ok_or_else(|| {
        anyhow!("no window available")
      })?
      .local_storage()
      .map_err(js_error)?
      .ok_or_else(|| {
        anyhow!(
          "local storage is disabled"
        )
      })
  }
}

impl StorageSlot for LocalStorageSlot {
  fn read(
    &self
  ) -> anyhow::Result<Option<String>> {
    self
      .storage()?
      .get_item(&self.key)
      .map_err(js_error)
  }

  fn write(
    &mut self,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .storage()?
      .set_item(&self.key, value)
      .map_err(js_error)
  }
}

fn js_error(
  value: JsValue
) -> anyhow::Error {
  anyhow!("{value:?}")
}

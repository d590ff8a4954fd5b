use super::*;

/// A placeholder for replies the forum has not sent yet.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct MoreComments {
  #[serde(default)]
  pub(crate) children: Vec<String>,
  #[serde(default)]
  pub(crate) count: u64,
  pub(crate) id: String,
  pub(crate) parent_id: String,
}

impl MoreComments {
  /// "Continue this thread" markers carry no child ids and must be expanded
  /// by loading the parent comment's own subtree.
  pub(crate) fn is_continue_thread(&self) -> bool {
    self.children.is_empty()
  }

  /// Stable identity used to expand each marker at most once per walk.
  pub(crate) fn key(&self) -> String {
    if self.is_continue_thread() {
      format!("continue:{}", self.parent_id)
    } else {
      format!("more:{}:{}", self.parent_id, self.children.join(","))
    }
  }
}

use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Comment {
  pub(crate) author: Option<String>,
  #[serde(default)]
  pub(crate) body: String,
  pub(crate) id: String,
  #[serde(default)]
  pub(crate) name: String,
  pub(crate) parent_id: Option<String>,
  pub(crate) permalink: Option<String>,
  #[serde(default, deserialize_with = "deserialize_replies")]
  pub(crate) replies: Vec<CommentNode>,
}

impl Comment {
  pub(crate) fn fullname(&self) -> String {
    if self.name.is_empty() {
      format!("{COMMENT_KIND}_{}", self.id)
    } else {
      self.name.clone()
    }
  }

  pub(crate) fn is_authored_by(&self, author: &str) -> bool {
    self.author.as_deref() == Some(author)
  }
}

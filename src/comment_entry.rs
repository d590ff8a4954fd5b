use super::*;

/// A comment from the anchor's subtree, in walk order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CommentEntry {
  pub(crate) author: Option<String>,
  pub(crate) body: String,
  pub(crate) depth: usize,
  pub(crate) id: String,
  pub(crate) permalink: Option<String>,
}

impl CommentEntry {
  pub(crate) fn author(&self) -> &str {
    self.author.as_deref().unwrap_or("[deleted]")
  }

  pub(crate) fn links(&self) -> Vec<String> {
    extract_links(&self.body)
  }

  pub(crate) fn new(comment: Comment, depth: usize) -> Self {
    let Comment {
      author,
      body,
      id,
      permalink,
      ..
    } = comment;

    Self {
      author,
      body,
      depth,
      id,
      permalink: permalink.map(|path| format!("{REDDIT_BASE_URL}{path}")),
    }
  }

  pub(crate) fn snippet(&self) -> String {
    truncate(&self.body.split_whitespace().collect::<Vec<_>>().join(" "), 80)
  }
}

use super::*;

/// Expands markers of a single thread through the forum API.
pub(crate) struct ThreadExpander {
  client: Client,
  link_id: String,
}

impl ThreadExpander {
  pub(crate) fn new(client: Client, link_id: String) -> Self {
    Self { client, link_id }
  }
}

impl CommentSource for ThreadExpander {
  async fn expand(&self, more: &MoreComments) -> Result<CommentForest> {
    self
      .client
      .fetch_more_children(&self.link_id, more)
      .await
      .with_context(|| {
        format!(
          "failed to load {} replies under {}",
          more.count, more.parent_id
        )
      })
  }
}

use super::*;

/// Loads the comments hidden behind a continuation marker.
pub(crate) trait CommentSource {
  async fn expand(&self, more: &MoreComments) -> Result<CommentForest>;
}

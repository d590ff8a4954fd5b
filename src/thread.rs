use super::*;

#[derive(Debug)]
pub(crate) struct Thread {
  pub(crate) comments: CommentForest,
  pub(crate) submission: Submission,
}

impl Thread {
  /// Builds a thread from the `[submission listing, comment listing]` pair
  /// the comments endpoint returns.
  pub(crate) fn from_listings(listings: Vec<Listing>) -> Result<Self> {
    let mut listings = listings.into_iter();

    let submission = listings
      .next()
      .and_then(|listing| listing.data.children.into_iter().next())
      .filter(|thing| thing.kind == SUBMISSION_KIND)
      .context("response does not start with a submission")?;

    let submission = serde_json::from_value::<Submission>(submission.data)
      .context("could not decode submission")?;

    let comments = listings
      .next()
      .map(CommentForest::from_listing)
      .unwrap_or_default();

    Ok(Self {
      comments,
      submission,
    })
  }

  /// Replies of the top-level comment named `parent`, as returned when a
  /// "continue this thread" link is loaded.
  pub(crate) fn replies_of(self, parent: &str) -> Option<CommentForest> {
    self
      .comments
      .into_nodes()
      .into_iter()
      .find_map(|node| match node {
        CommentNode::Comment(comment) if comment.fullname() == parent => {
          Some(CommentForest::from_nodes(comment.replies))
        }
        _ => None,
      })
  }
}

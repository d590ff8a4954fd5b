use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Client {
  const COMMENTS_URL: &str = "https://www.reddit.com/comments";

  const MORE_CHILDREN_LIMIT: usize = 100;

  const MORE_CHILDREN_URL: &str =
    "https://www.reddit.com/api/morechildren.json";

  const THREAD_COMMENT_LIMIT: &str = "500";

  fn continuation_url(link_id: &str, parent_id: &str) -> String {
    let link = link_id.strip_prefix(SUBMISSION_PREFIX).unwrap_or(link_id);
    let parent = parent_id.strip_prefix(COMMENT_PREFIX).unwrap_or(parent_id);

    format!("{}/{link}/_/{parent}.json", Self::COMMENTS_URL)
  }

  pub(crate) fn expander(&self, submission: &Submission) -> ThreadExpander {
    ThreadExpander::new(self.clone(), submission.fullname())
  }

  async fn fetch_continuation(
    &self,
    link_id: &str,
    parent_id: &str,
  ) -> Result<CommentForest> {
    let listings = self
      .client
      .get(Self::continuation_url(link_id, parent_id))
      .query(&[("raw_json", "1")])
      .send()
      .await?
      .error_for_status()?
      .json::<Vec<Listing>>()
      .await?;

    Thread::from_listings(listings)?
      .replies_of(parent_id)
      .with_context(|| format!("{parent_id} missing from its own thread"))
  }

  pub(crate) async fn fetch_more_children(
    &self,
    link_id: &str,
    more: &MoreComments,
  ) -> Result<CommentForest> {
    if more.is_continue_thread() {
      return self.fetch_continuation(link_id, &more.parent_id).await;
    }

    let mut batches = Vec::new();

    for query in Self::more_children_queries(link_id, &more.children) {
      batches.push(self.fetch_more_children_batch(&query).await);
    }

    Ok(CommentForest::from_flat_things(Self::merge_batches(
      batches,
    )?))
  }

  async fn fetch_more_children_batch(
    &self,
    query: &[(&str, String)],
  ) -> Result<Vec<Thing>> {
    let response = self
      .client
      .get(Self::MORE_CHILDREN_URL)
      .query(query)
      .send()
      .await?
      .error_for_status()?
      .json::<MoreChildrenResponse>()
      .await?;

    if !response.json.errors.is_empty() {
      bail!("morechildren returned errors: {:?}", response.json.errors);
    }

    Ok(response.json.data.things)
  }

  pub(crate) async fn fetch_thread(&self, submission_id: &str) -> Result<Thread> {
    let listings = self
      .client
      .get(format!("{}/{submission_id}.json", Self::COMMENTS_URL))
      .query(&[("limit", Self::THREAD_COMMENT_LIMIT), ("raw_json", "1")])
      .send()
      .await?
      .error_for_status()?
      .json::<Vec<Listing>>()
      .await?;

    Thread::from_listings(listings)
  }

  /// Keeps whatever the successful batches loaded. Fails only when every
  /// batch failed.
  fn merge_batches(batches: Vec<Result<Vec<Thing>>>) -> Result<Vec<Thing>> {
    let total = batches.len();

    let mut failed = 0;
    let mut last_error = None;
    let mut things = Vec::new();

    for (batch, result) in batches.into_iter().enumerate() {
      match result {
        Ok(loaded) => things.extend(loaded),
        Err(error) => {
          warn!(batch, total, "could not load reply batch: {error:#}");
          failed += 1;
          last_error = Some(error);
        }
      }
    }

    match last_error {
      Some(error) if failed == total => Err(error),
      _ => Ok(things),
    }
  }

  fn more_children_queries(
    link_id: &str,
    children: &[String],
  ) -> Vec<[(&'static str, String); 4]> {
    children
      .chunks(Self::MORE_CHILDREN_LIMIT)
      .map(|chunk| {
        [
          ("api_type", "json".to_string()),
          ("children", chunk.join(",")),
          ("link_id", link_id.to_string()),
          ("raw_json", "1".to_string()),
        ]
      })
      .collect()
  }

  pub(crate) fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
    Ok(Self {
      client: reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .context("could not build http client")?,
    })
  }
}

impl PageSource for Client {
  async fn fetch_page(&self, url: &Url) -> Result<String> {
    Ok(
      self
        .client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?,
    )
  }
}

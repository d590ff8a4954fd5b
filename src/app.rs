use super::*;

pub(crate) struct App {
  arguments: Arguments,
  client: Client,
}

impl App {
  fn candidate_links<'a>(
    &self,
    entries: &'a [CommentEntry],
  ) -> Vec<(&'a CommentEntry, String)> {
    entries
      .iter()
      .flat_map(|entry| entry.links().into_iter().map(move |url| (entry, url)))
      .filter(|(entry, url)| {
        let keep = self.arguments.all_links || LinkRule::matching(url).is_some();

        if !keep {
          debug!(comment = entry.id, url, "ignoring link to unknown host");
        }

        keep
      })
      .collect()
  }

  async fn collect_entries(
    &self,
    submission_id: &str,
  ) -> Result<Option<Vec<CommentEntry>>> {
    let delay = Duration::from_secs(self.arguments.retry_delay);

    for attempt in 0..=self.arguments.retries {
      if attempt > 0 {
        info!(attempt, "anchor comment missing, retrying in {delay:?}");
        sleep(delay).await;
      }

      let thread = self
        .client
        .fetch_thread(submission_id)
        .await
        .with_context(|| format!("failed to load thread {submission_id}"))?;

      info!(
        title = thread.submission.title,
        subreddit = thread.submission.subreddit.as_deref().unwrap_or_default(),
        url = thread.submission.url.as_deref().unwrap_or_default(),
        top_level = thread.comments.len(),
        "loaded thread"
      );

      if thread.comments.is_empty() {
        debug!("thread has no comments yet");
      }

      let expander = self.client.expander(&thread.submission);

      if let Some(entries) = resolve_relevant_comments(
        &expander,
        thread.comments,
        &self.arguments.anchor_author,
      )
      .await
      {
        return Ok(Some(entries));
      }
    }

    Ok(None)
  }

  pub(crate) fn new(arguments: Arguments) -> Result<Self> {
    let client = Client::new(
      &arguments.user_agent,
      Duration::from_secs(arguments.timeout),
    )?;

    Ok(Self { arguments, client })
  }

  fn print(&self, links: &[VideoLink]) -> Result {
    VideoLink::write_all(&mut io::stdout().lock(), links, self.arguments.json)
  }

  async fn resolve_links(
    &self,
    candidates: Vec<(&CommentEntry, String)>,
  ) -> Vec<VideoLink> {
    stream::iter(candidates.into_iter().map(|(entry, url)| async move {
      let result = resolve_media_url(&self.client, &url).await;
      VideoLink::new(entry, url, result)
    }))
    .buffered(self.arguments.jobs.max(1))
    .collect()
    .await
  }

  pub(crate) async fn run(self) -> Result {
    let submission_id = parse_submission_id(&self.arguments.thread)?;

    let Some(entries) = self.collect_entries(&submission_id).await? else {
      info!(
        author = self.arguments.anchor_author,
        "no anchor comment yet, nothing to resolve"
      );
      return self.print(&[]);
    };

    info!(comments = entries.len(), "collected replies");

    for entry in &entries {
      debug!(
        id = entry.id,
        depth = entry.depth,
        author = entry.author(),
        "{}",
        entry.snippet()
      );
    }

    let candidates = self.candidate_links(&entries);

    let links = self.resolve_links(candidates).await;

    info!(
      total = links.len(),
      resolved = links.iter().filter(|link| link.is_resolved()).count(),
      "resolved links"
    );

    self.print(&links)
  }
}

use super::*;

/// Finds the anchor comment in `forest` and flattens its reply subtree.
///
/// Returns `None` when no loaded comment is authored by `anchor_author`.
/// That is expected shortly after a thread is posted, since the anchor is
/// created asynchronously, and callers may simply try again later.
pub(crate) async fn resolve_relevant_comments<S: CommentSource>(
  source: &S,
  forest: CommentForest,
  anchor_author: &str,
) -> Option<Vec<CommentEntry>> {
  let anchor = find_anchor(forest, anchor_author)?;

  info!(id = anchor.id, "found anchor comment");

  Some(flatten_replies(source, anchor).await)
}

/// First comment by `author` in breadth-first order over every loaded level.
/// Markers are counted but never expanded here.
pub(crate) fn find_anchor(
  forest: CommentForest,
  author: &str,
) -> Option<Comment> {
  let mut level = forest;
  let mut unexpanded = 0;

  while !level.is_empty() {
    let (comments, more) = level.partition();

    unexpanded += more.len();

    let mut next = Vec::new();

    for comment in comments {
      if comment.is_authored_by(author) {
        return Some(comment);
      }

      next.extend(comment.replies);
    }

    level = CommentForest::from_nodes(next);
  }

  debug!(author, unexpanded, "no anchor comment among loaded comments");

  None
}

/// Depth-first, pre-order walk of `anchor` and everything below it.
///
/// Markers are expanded through `source` and their contents visited in
/// place. A marker that fails to expand is logged and skipped.
pub(crate) async fn flatten_replies<S: CommentSource>(
  source: &S,
  anchor: Comment,
) -> Vec<CommentEntry> {
  let mut entries = Vec::new();
  let mut expanded = HashSet::new();
  let mut seen = HashSet::new();

  let mut stack = vec![(CommentNode::Comment(anchor), 0)];

  while let Some((node, depth)) = stack.pop() {
    match node {
      CommentNode::Comment(mut comment) => {
        if !seen.insert(comment.id.clone()) {
          debug!(id = comment.id, "skipping repeated comment");
          continue;
        }

        let replies = mem::take(&mut comment.replies);

        entries.push(CommentEntry::new(comment, depth));

        stack.extend(replies.into_iter().rev().map(|reply| (reply, depth + 1)));
      }
      CommentNode::More(more) => {
        if !expanded.insert(more.key()) {
          debug!(
            id = more.id,
            parent = more.parent_id,
            "skipping repeated marker"
          );
          continue;
        }

        match source.expand(&more).await {
          Ok(forest) => {
            debug!(
              id = more.id,
              parent = more.parent_id,
              loaded = forest.len(),
              "expanded marker"
            );

            stack.extend(
              forest
                .into_nodes()
                .into_iter()
                .rev()
                .map(|node| (node, depth)),
            );
          }
          Err(error) => {
            warn!(
              parent = more.parent_id,
              count = more.count,
              "could not expand marker: {error:#}"
            );
          }
        }
      }
    }
  }

  entries
}

#[cfg(test)]
mod tests {
  use {super::*, std::cell::Cell};

  #[derive(Default)]
  struct StubSource {
    calls: Cell<usize>,
    pages: HashMap<String, Vec<CommentNode>>,
  }

  impl StubSource {
    fn with(mut self, parent: &str, nodes: Vec<CommentNode>) -> Self {
      self.pages.insert(parent.to_string(), nodes);
      self
    }
  }

  impl CommentSource for StubSource {
    async fn expand(&self, more: &MoreComments) -> Result<CommentForest> {
      self.calls.set(self.calls.get() + 1);

      self
        .pages
        .get(&more.parent_id)
        .cloned()
        .map(CommentForest::from_nodes)
        .ok_or_else(|| anyhow::anyhow!("no page for {}", more.parent_id))
    }
  }

  fn comment(id: &str, author: &str, replies: Vec<CommentNode>) -> CommentNode {
    CommentNode::Comment(Comment {
      author: Some(author.to_string()),
      body: format!("body of {id}"),
      id: id.to_string(),
      name: format!("t1_{id}"),
      parent_id: None,
      permalink: None,
      replies,
    })
  }

  fn more(parent: &str, children: &[&str]) -> CommentNode {
    CommentNode::More(MoreComments {
      children: children.iter().map(ToString::to_string).collect(),
      count: 0,
      id: children.first().copied().unwrap_or("_").to_string(),
      parent_id: parent.to_string(),
    })
  }

  fn ids(entries: &[CommentEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.id.as_str()).collect()
  }

  fn thread() -> CommentForest {
    CommentForest::from_nodes(vec![
      comment("x", "fan", vec![comment("x1", "anchor-reply-impostor", vec![])]),
      comment(
        "a",
        "AutoModerator",
        vec![
          comment("b", "u1", vec![comment("c", "u2", vec![])]),
          comment("d", "u3", vec![]),
        ],
      ),
      comment("y", "other", vec![]),
    ])
  }

  #[tokio::test]
  async fn resolves_anchor_and_descendants_only() {
    let entries = resolve_relevant_comments(
      &StubSource::default(),
      thread(),
      "AutoModerator",
    )
    .await
    .unwrap();

    assert_eq!(ids(&entries), vec!["a", "b", "c", "d"]);
    assert_eq!(
      entries.iter().map(|entry| entry.depth).collect::<Vec<_>>(),
      vec![0, 1, 2, 1]
    );
  }

  #[tokio::test]
  async fn missing_anchor_yields_none() {
    let forest = CommentForest::from_nodes(vec![
      comment("x", "fan", vec![]),
      more("t3_post", &["z"]),
    ]);

    let source = StubSource::default();

    assert!(
      resolve_relevant_comments(&source, forest, "AutoModerator")
        .await
        .is_none()
    );
    assert_eq!(source.calls.get(), 0);
  }

  #[tokio::test]
  async fn empty_forest_yields_none() {
    assert!(
      resolve_relevant_comments(
        &StubSource::default(),
        CommentForest::default(),
        "AutoModerator"
      )
      .await
      .is_none()
    );
  }

  #[test]
  fn first_anchor_wins() {
    let forest = CommentForest::from_nodes(vec![
      comment("first", "AutoModerator", vec![]),
      comment("second", "AutoModerator", vec![]),
    ]);

    assert_eq!(find_anchor(forest, "AutoModerator").unwrap().id, "first");
  }

  #[test]
  fn nested_anchor_is_found() {
    let forest = CommentForest::from_nodes(vec![comment(
      "x",
      "fan",
      vec![comment("a", "AutoModerator", vec![comment("b", "u1", vec![])])],
    )]);

    let anchor = find_anchor(forest, "AutoModerator").unwrap();

    assert_eq!(anchor.id, "a");
    assert_eq!(anchor.replies.len(), 1);
  }

  #[test]
  fn shallower_anchor_wins_over_earlier_nested_one() {
    let forest = CommentForest::from_nodes(vec![
      comment("x", "fan", vec![comment("deep", "AutoModerator", vec![])]),
      comment("top", "AutoModerator", vec![]),
    ]);

    assert_eq!(find_anchor(forest, "AutoModerator").unwrap().id, "top");
  }

  #[tokio::test]
  async fn nested_anchor_flattens_only_its_subtree() {
    let forest = CommentForest::from_nodes(vec![comment(
      "x",
      "fan",
      vec![
        comment("a", "AutoModerator", vec![comment("b", "u1", vec![])]),
        comment("y", "u2", vec![]),
      ],
    )]);

    let entries =
      resolve_relevant_comments(&StubSource::default(), forest, "AutoModerator")
        .await
        .unwrap();

    assert_eq!(ids(&entries), vec!["a", "b"]);
  }

  #[test]
  fn markers_are_not_anchors() {
    let forest = CommentForest::from_nodes(vec![more("t3_post", &["a"])]);
    assert!(find_anchor(forest, "AutoModerator").is_none());
  }

  #[tokio::test]
  async fn markers_expand_in_place_at_any_depth() {
    let anchor = comment(
      "a",
      "AutoModerator",
      vec![
        comment("b", "u1", vec![more("t1_b", &["c", "d"])]),
        more("t1_a", &["f"]),
        comment("g", "u5", vec![]),
      ],
    );

    let source = StubSource::default()
      .with(
        "t1_b",
        vec![
          comment("c", "u2", vec![comment("c1", "u2", vec![])]),
          comment("d", "u3", vec![]),
        ],
      )
      .with(
        "t1_a",
        vec![comment("f", "u4", vec![more("t1_f", &[])])],
      )
      .with("t1_f", vec![comment("f1", "u6", vec![])]);

    let CommentNode::Comment(anchor) = anchor else {
      unreachable!();
    };

    let entries = flatten_replies(&source, anchor).await;

    assert_eq!(ids(&entries), vec!["a", "b", "c", "c1", "d", "f", "f1", "g"]);
    assert_eq!(source.calls.get(), 3);
    assert_eq!(
      entries.iter().map(|entry| entry.depth).collect::<Vec<_>>(),
      vec![0, 1, 2, 3, 2, 1, 2, 1]
    );
  }

  #[tokio::test]
  async fn failed_expansions_are_skipped() {
    let anchor = comment(
      "a",
      "AutoModerator",
      vec![more("t1_missing", &["q"]), comment("b", "u1", vec![])],
    );

    let CommentNode::Comment(anchor) = anchor else {
      unreachable!();
    };

    let entries = flatten_replies(&StubSource::default(), anchor).await;

    assert_eq!(ids(&entries), vec!["a", "b"]);
  }

  #[tokio::test]
  async fn repeated_nodes_are_visited_once() {
    let anchor = comment(
      "a",
      "AutoModerator",
      vec![
        more("t1_a", &["b"]),
        more("t1_a", &["b"]),
        comment("b", "u1", vec![]),
      ],
    );

    let source =
      StubSource::default().with("t1_a", vec![comment("b", "u1", vec![])]);

    let CommentNode::Comment(anchor) = anchor else {
      unreachable!();
    };

    let entries = flatten_replies(&source, anchor).await;

    assert_eq!(ids(&entries), vec!["a", "b"]);
    assert_eq!(source.calls.get(), 1);
  }

  #[tokio::test]
  async fn repeated_calls_do_not_share_results() {
    let source = StubSource::default();

    let first = resolve_relevant_comments(&source, thread(), "AutoModerator")
      .await
      .unwrap();

    let second = resolve_relevant_comments(&source, thread(), "AutoModerator")
      .await
      .unwrap();

    assert_eq!(first, second);
    assert_eq!(ids(&second), vec!["a", "b", "c", "d"]);
  }
}

use super::*;

/// An ordered level of the comment tree.
#[derive(Clone, Debug, Default)]
pub(crate) struct CommentForest {
  nodes: Vec<CommentNode>,
}

impl CommentForest {
  /// Rebuilds a tree from the flat, parent-linked list returned when a marker
  /// is expanded. Things whose parent is not part of the list become roots.
  pub(crate) fn from_flat_things(things: Vec<Thing>) -> Self {
    let mut nodes = things
      .into_iter()
      .filter_map(Thing::into_node)
      .map(Some)
      .collect::<Vec<_>>();

    let positions = nodes
      .iter()
      .enumerate()
      .filter_map(|(idx, node)| match node {
        Some(CommentNode::Comment(comment)) => Some((comment.fullname(), idx)),
        _ => None,
      })
      .collect::<HashMap<_, _>>();

    let mut children = vec![Vec::new(); nodes.len()];
    let mut roots = Vec::new();

    for (idx, node) in nodes.iter().enumerate() {
      let parent = match node {
        Some(CommentNode::Comment(comment)) => comment.parent_id.as_deref(),
        Some(CommentNode::More(more)) => Some(more.parent_id.as_str()),
        None => None,
      };

      match parent.and_then(|parent| positions.get(parent)) {
        Some(&parent_idx) if parent_idx != idx => children[parent_idx].push(idx),
        _ => roots.push(idx),
      }
    }

    let nodes = roots
      .into_iter()
      .filter_map(|idx| Self::attach(idx, &mut nodes, &children))
      .collect();

    Self { nodes }
  }

  pub(crate) fn from_listing(listing: Listing) -> Self {
    Self::from_nodes(
      listing
        .data
        .children
        .into_iter()
        .filter_map(Thing::into_node)
        .collect(),
    )
  }

  pub(crate) fn from_nodes(nodes: Vec<CommentNode>) -> Self {
    Self { nodes }
  }

  fn attach(
    idx: usize,
    nodes: &mut [Option<CommentNode>],
    children: &[Vec<usize>],
  ) -> Option<CommentNode> {
    let mut node = nodes.get_mut(idx)?.take()?;

    if let CommentNode::Comment(comment) = &mut node {
      for &child in &children[idx] {
        if let Some(child) = Self::attach(child, nodes, children) {
          comment.replies.push(child);
        }
      }
    }

    Some(node)
  }

  pub(crate) fn into_nodes(self) -> Vec<CommentNode> {
    self.nodes
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Splits the forest into concrete comments and continuation markers,
  /// keeping the relative order within each list.
  pub(crate) fn partition(self) -> (Vec<Comment>, Vec<MoreComments>) {
    let mut comments = Vec::new();
    let mut more = Vec::new();

    for node in self.nodes {
      match node {
        CommentNode::Comment(comment) => comments.push(comment),
        CommentNode::More(marker) => more.push(marker),
      }
    }

    (comments, more)
  }
}

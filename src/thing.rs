use super::*;

/// A raw `{ "kind": ..., "data": ... }` envelope as returned by the forum API.
#[derive(Debug, Deserialize)]
pub(crate) struct Thing {
  #[serde(default)]
  pub(crate) data: Value,
  pub(crate) kind: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
  pub(crate) data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingData {
  #[serde(default)]
  pub(crate) children: Vec<Thing>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoreChildrenResponse {
  pub(crate) json: MoreChildrenJson,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoreChildrenJson {
  #[serde(default)]
  pub(crate) data: MoreChildrenData,
  #[serde(default)]
  pub(crate) errors: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MoreChildrenData {
  #[serde(default)]
  pub(crate) things: Vec<Thing>,
}

impl Thing {
  /// Decodes a comment-tree element. Anything that is neither a comment nor a
  /// continuation marker is logged and dropped.
  pub(crate) fn into_node(self) -> Option<CommentNode> {
    let Thing { data, kind } = self;

    let decoded = match kind.as_str() {
      COMMENT_KIND => serde_json::from_value(data).map(CommentNode::Comment),
      MORE_KIND => serde_json::from_value(data).map(CommentNode::More),
      _ => {
        warn!(kind, "unexpected element in comment forest");
        return None;
      }
    };

    decoded
      .map_err(|error| warn!(kind, %error, "malformed comment forest element"))
      .ok()
  }
}

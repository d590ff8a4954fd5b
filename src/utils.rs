use super::*;

/// The forum sends `replies` as an empty string when a comment has none, and
/// as a listing otherwise.
pub(crate) fn deserialize_replies<'de, D>(
  deserializer: D,
) -> Result<Vec<CommentNode>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(Vec::new()),
    Some(Value::String(s)) if s.is_empty() => Ok(Vec::new()),
    Some(Value::String(s)) => Err(de::Error::invalid_value(
      Unexpected::Str(&s),
      &"empty string or listing",
    )),
    Some(value @ Value::Object(_)) => serde_json::from_value::<Listing>(value)
      .map(|listing| CommentForest::from_listing(listing).into_nodes())
      .map_err(de::Error::custom),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"empty string or listing",
    )),
    Some(Value::Number(_)) => Err(de::Error::invalid_type(
      Unexpected::Other("number"),
      &"empty string or listing",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"empty string or listing",
    )),
  }
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with `...`.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  match text.char_indices().nth(max_chars) {
    Some((end, _)) => format!("{}...", text[..end].trim_end()),
    None => text.to_string(),
  }
}

use super::*;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"https?://[^\s()\[\]<>"'`]+"#).expect("valid url pattern")
});

const TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', '*', '_', '~'];

/// Candidate URLs in a comment body, deduplicated, in order of appearance.
pub(crate) fn extract_links(body: &str) -> Vec<String> {
  let decoded = html_escape::decode_html_entities(body);

  let mut seen = HashSet::new();

  URL_PATTERN
    .find_iter(&decoded)
    .map(|found| found.as_str().trim_end_matches(TRAILING).to_string())
    .filter(|link| seen.insert(link.clone()))
    .collect()
}

/// Accepts a bare id, a `t3_` fullname, or a thread URL.
pub(crate) fn parse_submission_id(input: &str) -> Result<String> {
  let input = input.trim();

  let id = if let Some(id) = input.strip_prefix(SUBMISSION_PREFIX) {
    id.to_string()
  } else if input.contains("://") {
    let url = Url::parse(input)
      .with_context(|| format!("could not parse thread url `{input}`"))?;

    let mut segments = url.path_segments().into_iter().flatten();

    let id = if url.host_str() == Some("redd.it") {
      segments.next()
    } else {
      segments
        .by_ref()
        .find(|segment| *segment == "comments")
        .and_then(|_| segments.next())
    };

    id.unwrap_or_default().to_string()
  } else {
    input.to_string()
  };

  if id.is_empty() || !id.chars().all(|ch| ch.is_ascii_alphanumeric()) {
    bail!("`{input}` does not name a thread");
  }

  Ok(id.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn extract_links_finds_markdown_and_bare_urls() {
    assert_eq!(
      extract_links(
        "[angle 2](https://streamja.com/abc) and https://streamable.com/xyz."
      ),
      vec![
        "https://streamja.com/abc".to_string(),
        "https://streamable.com/xyz".to_string(),
      ]
    );
  }

  #[test]
  fn extract_links_decodes_entities_and_deduplicates() {
    assert_eq!(
      extract_links(
        "https://example.com/v?a=1&amp;b=2 again https://example.com/v?a=1&b=2"
      ),
      vec!["https://example.com/v?a=1&b=2".to_string()]
    );
  }

  #[test]
  fn extract_links_handles_bodies_without_links() {
    assert!(extract_links("no links here, just http talk").is_empty());
  }

  #[test]
  fn parse_submission_id_accepts_all_forms() {
    assert_eq!(parse_submission_id("abc123").unwrap(), "abc123");
    assert_eq!(parse_submission_id("t3_abc123").unwrap(), "abc123");
    assert_eq!(
      parse_submission_id(
        "https://www.reddit.com/r/soccer/comments/abc123/team_a_1_0_team_b/"
      )
      .unwrap(),
      "abc123"
    );
    assert_eq!(
      parse_submission_id("https://old.reddit.com/comments/ABC123").unwrap(),
      "abc123"
    );
    assert_eq!(parse_submission_id("https://redd.it/abc123").unwrap(), "abc123");
  }

  #[test]
  fn parse_submission_id_rejects_garbage() {
    assert!(parse_submission_id("").is_err());
    assert!(parse_submission_id("https://www.reddit.com/r/soccer/").is_err());
    assert!(parse_submission_id("abc/def").is_err());
  }
}

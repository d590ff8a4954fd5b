use super::*;

/// Resolves a video page URL to a direct media URL using the first
/// [`LinkRule`] whose host fragment appears in `url`.
pub(crate) async fn resolve_media_url<P: PageSource>(
  pages: &P,
  url: &str,
) -> Result<String, ResolveError> {
  let Some(rule) = LinkRule::matching(url) else {
    return Err(ResolveError::UnsupportedHost {
      url: url.to_string(),
    });
  };

  let parsed = Url::parse(url).map_err(|source| ResolveError::InvalidUrl {
    source,
    url: url.to_string(),
  })?;

  let html =
    pages
      .fetch_page(&parsed)
      .await
      .map_err(|source| ResolveError::Fetch {
        source,
        url: url.to_string(),
      })?;

  let media_url =
    rule
      .extract(&html)
      .ok_or_else(|| ResolveError::MissingElement {
        attribute: rule.attribute,
        selector: rule.selector,
        url: url.to_string(),
      })?;

  debug!(url, media_url, host = rule.host, "resolved media url");

  Ok(media_url)
}

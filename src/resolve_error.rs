use super::*;

#[derive(Debug, Error)]
pub(crate) enum ResolveError {
  #[error("failed to fetch {url}: {source:#}")]
  Fetch {
    source: anyhow::Error,
    url: String,
  },
  #[error("{url} is not a valid url: {source}")]
  InvalidUrl {
    source: url::ParseError,
    url: String,
  },
  #[error("no `{attribute}` on `{selector}` in {url}")]
  MissingElement {
    attribute: &'static str,
    selector: &'static str,
    url: String,
  },
  #[error("no existing routine for url: {url}")]
  UnsupportedHost { url: String },
}

impl ResolveError {
  pub(crate) fn url(&self) -> &str {
    match self {
      Self::Fetch { url, .. }
      | Self::InvalidUrl { url, .. }
      | Self::MissingElement { url, .. }
      | Self::UnsupportedHost { url } => url,
    }
  }
}

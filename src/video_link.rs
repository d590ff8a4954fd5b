use super::*;

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub(crate) enum Resolution {
  Failed { reason: String },
  Resolved { media_url: String },
}

/// A candidate link from one comment and what it resolved to.
#[derive(Debug, Serialize)]
pub(crate) struct VideoLink {
  pub(crate) author: String,
  pub(crate) comment_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) permalink: Option<String>,
  #[serde(flatten)]
  pub(crate) resolution: Resolution,
  pub(crate) url: String,
}

impl From<Result<String, ResolveError>> for Resolution {
  fn from(result: Result<String, ResolveError>) -> Self {
    match result {
      Ok(media_url) => Self::Resolved { media_url },
      Err(error) => Self::Failed {
        reason: error.to_string(),
      },
    }
  }
}

impl Display for VideoLink {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match &self.resolution {
      Resolution::Failed { reason } => {
        write!(f, "{}\t{}\terror: {reason}", self.comment_id, self.url)
      }
      Resolution::Resolved { media_url } => {
        write!(f, "{}\t{}\t{media_url}", self.comment_id, self.url)
      }
    }
  }
}

impl VideoLink {
  pub(crate) fn is_resolved(&self) -> bool {
    matches!(self.resolution, Resolution::Resolved { .. })
  }

  pub(crate) fn new(
    entry: &CommentEntry,
    url: String,
    result: Result<String, ResolveError>,
  ) -> Self {
    if let Err(error) = &result {
      warn!(comment = entry.id, url = error.url(), "{error}");
    }

    Self {
      author: entry.author().to_string(),
      comment_id: entry.id.clone(),
      permalink: entry.permalink.clone(),
      resolution: result.into(),
      url,
    }
  }

  /// JSON mode always writes an array, even an empty one. Text mode writes one
  /// line per link.
  pub(crate) fn write_all(
    out: &mut impl Write,
    links: &[VideoLink],
    json: bool,
  ) -> Result {
    if json {
      serde_json::to_writer_pretty(&mut *out, links)?;
      writeln!(out)?;
    } else {
      for link in links {
        writeln!(out, "{link}")?;
      }
    }

    Ok(())
  }
}

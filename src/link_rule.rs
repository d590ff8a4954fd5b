use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum AttributeKind {
  Absolute,
  ProtocolRelative,
}

/// How to find the media URL on one hosting site's page.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LinkRule {
  pub(crate) attribute: &'static str,
  pub(crate) host: &'static str,
  pub(crate) kind: AttributeKind,
  pub(crate) selector: &'static str,
}

impl LinkRule {
  /// Checked in order, first match wins.
  pub(crate) const ALL: &[LinkRule] = &[
    LinkRule {
      attribute: "src",
      host: "streamja",
      kind: AttributeKind::Absolute,
      selector: "video > source",
    },
    LinkRule {
      attribute: "src",
      host: "streamable",
      kind: AttributeKind::ProtocolRelative,
      selector: "div > video",
    },
    LinkRule {
      attribute: "data-hd-file",
      host: "clippituser",
      kind: AttributeKind::Absolute,
      selector: "#player-container",
    },
    LinkRule {
      attribute: "src",
      host: "streamvi",
      kind: AttributeKind::Absolute,
      selector: "video > source",
    },
  ];

  /// Pulls the media URL out of `html`, or `None` when the element or the
  /// attribute is missing or empty.
  pub(crate) fn extract(&self, html: &str) -> Option<String> {
    let selector = Selector::parse(self.selector).ok()?;

    let document = Html::parse_document(html);

    let value = document
      .select(&selector)
      .next()?
      .value()
      .attr(self.attribute)?
      .trim();

    if value.is_empty() {
      return None;
    }

    Some(match self.kind {
      AttributeKind::Absolute => value.to_string(),
      AttributeKind::ProtocolRelative if value.starts_with("//") => {
        format!("https:{value}")
      }
      AttributeKind::ProtocolRelative => value.to_string(),
    })
  }

  pub(crate) fn matching(url: &str) -> Option<&'static LinkRule> {
    Self::ALL.iter().find(|rule| url.contains(rule.host))
  }
}

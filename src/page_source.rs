use super::*;

/// Fetches the HTML document behind a video page.
pub(crate) trait PageSource {
  async fn fetch_page(&self, url: &Url) -> Result<String>;
}

use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Submission {
  pub(crate) id: String,
  #[serde(default)]
  pub(crate) name: String,
  pub(crate) subreddit: Option<String>,
  #[serde(default)]
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl Submission {
  pub(crate) fn fullname(&self) -> String {
    if self.name.is_empty() {
      format!("{SUBMISSION_PREFIX}{}", self.id)
    } else {
      self.name.clone()
    }
  }
}

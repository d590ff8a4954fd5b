use super::*;

/// Collect and resolve the alternative angles posted under a match thread
#[derive(Debug, Parser)]
#[command(name = "angles", version, about, long_about = None)]
pub(crate) struct Arguments {
  /// Resolve every link, not just links to known video hosts
  #[arg(long)]
  pub(crate) all_links: bool,

  /// Author of the comment whose replies hold the angles
  #[arg(long, env = "ANGLES_ANCHOR_AUTHOR", default_value = "AutoModerator")]
  pub(crate) anchor_author: String,

  /// Number of links resolved at once
  #[arg(long, default_value_t = 4)]
  pub(crate) jobs: usize,

  /// Print results as JSON
  #[arg(long)]
  pub(crate) json: bool,

  /// How often to re-fetch the thread while the anchor comment is missing
  #[arg(long, env = "ANGLES_RETRIES", default_value_t = 0)]
  pub(crate) retries: u32,

  /// Seconds to wait between retries
  #[arg(long, env = "ANGLES_RETRY_DELAY", default_value_t = 15)]
  pub(crate) retry_delay: u64,

  /// Thread id, `t3_` fullname, or thread URL
  pub(crate) thread: String,

  /// HTTP request timeout in seconds
  #[arg(long, env = "ANGLES_TIMEOUT", default_value_t = 10)]
  pub(crate) timeout: u64,

  /// User agent sent with every request
  #[arg(long, env = "ANGLES_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
  pub(crate) user_agent: String,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub(crate) verbose: u8,
}

impl Arguments {
  pub(crate) fn log_filter(&self) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
      EnvFilter::new(match self.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
      })
    })
  }
}

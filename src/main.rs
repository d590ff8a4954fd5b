use {
  anyhow::{Context, bail},
  app::App,
  arguments::Arguments,
  clap::Parser,
  client::Client,
  comment::Comment,
  comment_entry::CommentEntry,
  comment_forest::CommentForest,
  comment_node::CommentNode,
  comment_source::CommentSource,
  comment_tree::resolve_relevant_comments,
  crossterm::style::Stylize,
  futures::stream::{self, StreamExt},
  link_resolver::resolve_media_url,
  link_rule::LinkRule,
  links::{extract_links, parse_submission_id},
  more_comments::MoreComments,
  page_source::PageSource,
  regex::Regex,
  resolve_error::ResolveError,
  scraper::{Html, Selector},
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  std::{
    backtrace::BacktraceStatus,
    collections::{HashMap, HashSet},
    fmt::{self, Display, Formatter},
    io::{self, IsTerminal, Write},
    mem, process,
    sync::LazyLock,
    time::Duration,
  },
  submission::Submission,
  thiserror::Error,
  thing::{Listing, MoreChildrenResponse, Thing},
  thread::Thread,
  thread_expander::ThreadExpander,
  tokio::time::sleep,
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  url::Url,
  utils::{deserialize_replies, truncate},
  video_link::VideoLink,
};

mod app;
mod arguments;
mod client;
mod comment;
mod comment_entry;
mod comment_forest;
mod comment_node;
mod comment_source;
mod comment_tree;
mod link_resolver;
mod link_rule;
mod links;
mod more_comments;
mod page_source;
mod resolve_error;
mod submission;
mod thing;
mod thread;
mod thread_expander;
mod utils;
mod video_link;

const COMMENT_KIND: &str = "t1";

const COMMENT_PREFIX: &str = "t1_";

const DEFAULT_USER_AGENT: &str =
  concat!("angles/", env!("CARGO_PKG_VERSION"), " (alternative angles bot)");

const LOG_ENV: &str = "ANGLES_LOG";

const MORE_KIND: &str = "more";

const REDDIT_BASE_URL: &str = "https://www.reddit.com";

const SUBMISSION_KIND: &str = "t3";

const SUBMISSION_PREFIX: &str = "t3_";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn report(
  out: &mut impl Write,
  error: &anyhow::Error,
  use_color: bool,
) -> io::Result<()> {
  let label = |text: &str| {
    if use_color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  writeln!(out, "{} {error}", label("error:"))?;

  let mut causes = error.chain().skip(1).peekable();

  if causes.peek().is_some() {
    writeln!(out, "\n{}", label("because:"))?;
  }

  for cause in causes {
    writeln!(out, "{} {cause}", label("-"))?;
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    writeln!(out, "{}\n{backtrace}", label("backtrace:"))?;
  }

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  tracing_subscriber::fmt()
    .with_env_filter(arguments.log_filter())
    .with_target(false)
    .with_writer(io::stderr)
    .init();

  App::new(arguments)?.run().await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let stderr = io::stderr();
    let use_color = stderr.is_terminal();
    let _ = report(&mut stderr.lock(), &error, use_color);
    process::exit(1);
  }
}

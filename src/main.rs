use clap::{Parser, Subcommand};
use postpress::{build, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postpress")]
#[command(about = "Static blog builder for front-matter markdown posts")]
#[command(long_about = "\
Static blog builder for front-matter markdown posts

Your filesystem is the data source. Every .md file directly under the source
directory becomes one post; an optional leading YAML block carries metadata:

  ---
  title: My Post          # falls back to the filename stem
  date: \"2024-01-01\"      # ISO date; controls ordering, newest first
  tags: [rust, blog]      # optional
  summary: One-liner.     # optional, shown above the body
  ---

  Body markdown, with fenced code blocks and tables.

Output (written to the output directory):

  posts.html    one <article> fragment per post, newest first
  posts.json    index of title/date/tags/slug/summary, same order

Malformed metadata never fails a build: bad dates sort to the epoch, missing
fields get defaults. Running with no arguments builds content/posts into
generated/.")]
#[command(version)]
struct Cli {
    /// Directory of markdown posts
    #[arg(long, default_value = "content/posts", global = true)]
    source: PathBuf,

    /// Output directory for the generated artifacts
    #[arg(long, default_value = "generated", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse all posts and write posts.html and posts.json (the default)
    Build,
    /// Parse and report without writing anything
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let result = build::build(&cli.source, &cli.output)?;
            output::print_build_output(&result);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let posts = build::collect_posts(&cli.source)?;
            output::print_check_output(&posts);
            println!("==> Content is valid");
        }
    }

    Ok(())
}

//! Forum Ad Rotator CLI
//!
//! Inspect which ads a viewer would be served and preview rotation over a
//! simulated topic list or post stream.

use std::collections::BTreeMap;
use std::path::PathBuf;

use ad_rotator::{
    AdSelector,
    config::{load_all, load_settings},
    error::Result,
    services::{PlacementFrequency, Stream},
};
use clap::{Args, Parser, Subcommand};

/// adrotate - Forum ad eligibility and rotation
#[derive(Parser, Debug)]
#[command(name = "adrotate", version, about = "Forum ad eligibility and rotation")]
struct Cli {
    /// Path to the ad settings file
    #[arg(short, long, default_value = "data/ads.toml")]
    settings: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the settings file
    Validate,

    /// List the ads eligible for a viewer
    Eligible(ViewerArgs),

    /// Serve ads over a simulated content stream
    Simulate {
        #[command(flatten)]
        viewer: ViewerArgs,

        /// Simulate a topic list with this many topics
        #[arg(long, conflicts_with = "posts")]
        topics: Option<usize>,

        /// Simulate a topic with this many posts
        #[arg(long)]
        posts: Option<usize>,

        /// Category the content belongs to
        #[arg(long)]
        category: Option<u64>,

        /// Parent of that category
        #[arg(long, requires = "category")]
        parent: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct ViewerArgs {
    /// Viewer profile (TOML); anonymous when omitted
    #[arg(long)]
    viewer: Option<PathBuf>,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Validate => {
            let settings = load_settings(&cli.settings)?;
            log::info!("✓ Settings OK ({} ads configured)", settings.ads.len());
        }

        Command::Eligible(viewer) => {
            let (settings, viewer) = load_all(&cli.settings, viewer.viewer.as_deref())?;
            let mut selector = AdSelector::from_settings(&settings, viewer);
            selector.initialize_if_needed();

            log::info!(
                "{} of {} ads eligible",
                selector.eligible_count(),
                settings.ads.len()
            );
            for ad in selector.eligible_ads() {
                println!(
                    "{}\t{}",
                    ad.id(),
                    ad.final_link.as_deref().unwrap_or("(no link)")
                );
            }
        }

        Command::Simulate {
            viewer,
            topics,
            posts,
            category,
            parent,
        } => {
            let (settings, viewer) = load_all(&cli.settings, viewer.viewer.as_deref())?;
            let mut selector = AdSelector::from_settings(&settings, viewer);

            if let Some(category) = category {
                if selector.is_category_excluded(category, parent) {
                    log::info!("Category {} is excluded from ads", category);
                    return Ok(());
                }
            }

            let (stream, items) = match (topics, posts) {
                (_, Some(posts)) => (Stream::PostStream, posts),
                (Some(topics), None) => (Stream::TopicList, topics),
                (None, None) => (Stream::TopicList, 10),
            };
            let frequency = PlacementFrequency::from_config(&settings.placement, stream);

            let mut served = 0;
            for position in 1..=items {
                let extra = BTreeMap::from([("position".to_string(), position.to_string())]);
                if let Some(ad) = selector.serve_for_placement(frequency.should_place(position), &extra) {
                    served += 1;
                    println!(
                        "after #{position}: {} -> {}",
                        ad.id,
                        ad.final_link.as_deref().unwrap_or("(no link)")
                    );
                    println!("  impression: {}", serde_json::to_string(&ad.impression())?);
                }
            }

            log::info!("Served {} ads over {} items", served, items);
        }
    }

    Ok(())
}

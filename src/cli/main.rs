use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coursetree::core::errors::Error;
use coursetree::core::telemetry::logging::init_logging;
use coursetree::pages::explorer::{Collapsible, CourseExplorer, CourseTreeItem, Preload};
use coursetree::services::backend::{decode_entries, MemoryEntrySource};
use coursetree::services::tree::{render_forest, PathTreeBuilder};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "coursetree",
    version,
    about = "Materialize course directory trees from backend entry lists"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tree of a single directory from its entry list
    Entries {
        /// JSON file holding an entry array or a response envelope
        file: PathBuf,
        /// Directory the entries belong to
        #[arg(long, default_value_t = 0)]
        directory_id: u64,
        /// Print the forest as JSON
        #[arg(long)]
        json: bool,
    },
    /// Expand every course in a backend snapshot
    Explore {
        /// JSON snapshot with courses, directories and entries
        snapshot: PathBuf,
        /// Only expand this course
        #[arg(long)]
        course: Option<u64>,
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Row<'a> {
    depth: usize,
    id: String,
    label: &'a str,
    icon: &'static str,
    context_value: &'static str,
    tooltip: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Entries {
            file,
            directory_id,
            json,
        } => {
            let body = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let entries = decode_entries(&body)?;
            let (forest, stats) = PathTreeBuilder::new(directory_id).build_with_stats(&entries);
            info!(
                files = stats.files,
                folders = stats.folders,
                skipped = stats.skipped_directories + stats.skipped_degenerate,
                replaced = stats.replaced_duplicates,
                "built tree for directory {}",
                directory_id
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&forest)?);
            } else {
                println!("{}", render_forest(&forest));
            }
        }
        Commands::Explore {
            snapshot,
            course,
            json,
        } => {
            let source = MemoryEntrySource::from_snapshot_file(&snapshot)
                .with_context(|| format!("failed to load snapshot {}", snapshot.display()))?;
            // full expansion fetches every directory anyway
            let explorer = CourseExplorer::new(Arc::new(source)).with_preload(Preload::Off);

            let root = match course {
                Some(course_id) => {
                    let courses = explorer.children(None).await?;
                    let found = courses.into_iter().find(
                        |item| matches!(item, CourseTreeItem::Course(c) if c.id == course_id),
                    );
                    Some(found.ok_or(Error::UnknownCourse(course_id))?)
                }
                None => None,
            };

            let items = explorer.expand_all(root.as_ref()).await?;
            if json {
                let rows: Vec<Row> = items
                    .iter()
                    .map(|(depth, item)| Row {
                        depth: *depth,
                        id: item.id(),
                        label: item.label(),
                        icon: item.icon(),
                        context_value: item.context_value(),
                        tooltip: item.tooltip(),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (depth, item) in &items {
                    let suffix = match item.collapsible() {
                        Collapsible::Collapsed => "/",
                        Collapsible::None => "",
                    };
                    println!("{}{}{}", "  ".repeat(*depth), item.label(), suffix);
                }
            }
        }
    }

    Ok(())
}

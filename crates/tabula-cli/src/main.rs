//! tabula CLI - render declarative sheet layouts to XLSX

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tabula::prelude::*;

#[derive(Parser)]
#[command(name = "tabula")]
#[command(
    author,
    version,
    about = "Render declarative sheet layouts to XLSX"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON layout configuration and store the XLSX file
    Render {
        /// Layout configuration (JSON)
        config: PathBuf,

        /// Storage root; buckets are directories below it
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Bucket (directory under the storage root)
        #[arg(short, long)]
        bucket: String,

        /// Object key (file name inside the bucket)
        #[arg(short, long)]
        key: String,
    },

    /// Render a flat table: one styled header row followed by value rows
    Basic {
        /// JSON array of rows, each an array of values
        rows: PathBuf,

        /// Comma-separated header titles
        #[arg(long, value_delimiter = ',')]
        headers: Vec<String>,

        /// Worksheet name
        #[arg(short = 'n', long, default_value = "Sheet1")]
        sheet_name: String,

        /// Storage root; buckets are directories below it
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Bucket (directory under the storage root)
        #[arg(short, long)]
        bucket: String,

        /// Object key (file name inside the bucket)
        #[arg(short, long)]
        key: String,
    },

    /// Print the rendering plan of a layout configuration as JSON
    Plan {
        /// Layout configuration (JSON)
        config: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            config,
            root,
            bucket,
            key,
        } => render(&config, root, bucket, key).await,
        Commands::Basic {
            rows,
            headers,
            sheet_name,
            root,
            bucket,
            key,
        } => basic(&rows, headers, sheet_name, root, bucket, key).await,
        Commands::Plan { config, output } => plan(&config, output.as_deref()),
    }
}

fn load_workbook(path: &Path) -> Result<Workbook> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let config = WorkbookConfig::from_json(&json)
        .with_context(|| format!("Failed to parse '{}'", path.display()))?;
    Workbook::from_config(&config)
        .with_context(|| format!("Invalid layout in '{}'", path.display()))
}

async fn render(config: &Path, root: PathBuf, bucket: String, key: String) -> Result<()> {
    let workbook = load_workbook(config)?;
    let store = FsBlobStore::new(root);

    Exporter::write_full(
        &workbook,
        FullExport {
            bucket: bucket.clone(),
            filename: key.clone(),
        },
        &store,
    )
    .await
    .with_context(|| format!("Failed to export '{}'", config.display()))?;

    eprintln!(
        "Rendered {} sheet(s) to {}",
        workbook.sheet_count(),
        store.object_path(&bucket, &key)?.display()
    );
    Ok(())
}

async fn basic(
    rows_path: &Path,
    headers: Vec<String>,
    sheet_name: String,
    root: PathBuf,
    bucket: String,
    key: String,
) -> Result<()> {
    let json = std::fs::read_to_string(rows_path)
        .with_context(|| format!("Failed to read '{}'", rows_path.display()))?;
    let rows: Vec<Vec<CellValue>> = serde_json::from_str(&json)
        .with_context(|| format!("Expected an array of rows in '{}'", rows_path.display()))?;
    let row_count = rows.len();

    let store = FsBlobStore::new(root);
    let path = store.object_path(&bucket, &key)?;

    Exporter::write_basic(
        BasicExport {
            headers,
            worksheet_name: sheet_name,
            rows,
            bucket,
            key,
        },
        &store,
    )
    .await
    .context("Failed to export table")?;

    eprintln!("Wrote {} row(s) to {}", row_count, path.display());
    Ok(())
}

fn plan(config: &Path, output: Option<&Path>) -> Result<()> {
    let workbook = load_workbook(config)?;

    let mut sink = RecordingSink::new();
    SheetComposer::new(&mut sink)
        .compose_workbook(&workbook)
        .context("Failed to compose layout")?;
    let json = sink
        .serialize_to_bytes()
        .context("Failed to serialize plan")?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!(
                "Wrote {} instruction(s) to {}",
                sink.instructions().len(),
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&json)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use repz::ai;
use repz::autosave::Autosave;
use repz::config::RepzConfig;
use repz::model::{ReportDraft, ReportPatch};
use repz::reports::ReportStore;
use repz::store::fs::FileStore;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{parse_index, print, resolve_index, Cli, Commands, DisplayIndex};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let data_dir = data_dir();
    let config = RepzConfig::load(&data_dir).unwrap_or_else(|e| {
        eprintln!("Warning: {}", e);
        RepzConfig::default()
    });
    let store =
        ReportStore::new(FileStore::new(data_dir)).with_max_reports(config.max_reports);

    if let Err(e) = run(cli, store, &config).await {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("REPZ_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let proj_dirs =
        ProjectDirs::from("com", "repz", "repz").expect("could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

async fn run(
    cli: Cli,
    mut store: ReportStore<FileStore>,
    config: &RepzConfig,
) -> Result<(), String> {
    let role = cli.role;

    match cli.command {
        Some(Commands::Create { title, content }) => {
            let report = store
                .create(role, ReportDraft::new(title, content.unwrap_or_default()))
                .map_err(|e| e.to_string())?;
            println!("Report created: {}", report.title.green());
        }

        Some(Commands::List) | None => {
            print::print_list(&store.featured(), &store.regular());
        }

        Some(Commands::View { index }) => {
            let idx = parse_index(&index)?;
            let id = resolve_index(&store, idx)?;
            let report = store
                .get(&id)
                .ok_or_else(|| format!("no report at index {}", idx))?;
            print::print_report(&idx.to_string(), report);
        }

        Some(Commands::Edit {
            index,
            title,
            content,
            status,
        }) => {
            let id = resolve_index(&store, parse_index(&index)?)?;
            let patch = ReportPatch {
                title,
                content,
                status,
            };
            if patch.is_empty() {
                return Err("nothing to change; pass --title, --content or --status".to_string());
            }
            store.update(role, &id, patch).map_err(|e| e.to_string())?;
            let title = store.get(&id).map(|r| r.title.clone()).unwrap_or_default();
            println!("Report updated: {}", title.green());
        }

        Some(Commands::Delete { index }) => {
            let id = resolve_index(&store, parse_index(&index)?)?;
            let title = store.get(&id).map(|r| r.title.clone()).unwrap_or_default();
            store.delete(role, &id).map_err(|e| e.to_string())?;
            println!("Report deleted: {}", title.red());
        }

        Some(Commands::Move { index, target }) => {
            let from = parse_index(&index)?;
            let to = parse_index(&target)?;
            // The featured section is not manually orderable.
            if !matches!(from, DisplayIndex::Regular(_)) || !matches!(to, DisplayIndex::Regular(_))
            {
                return Err("only regular reports can be moved".to_string());
            }
            let moved = resolve_index(&store, from)?;
            let target_id = resolve_index(&store, to)?;
            store
                .reorder(role, &moved, &target_id)
                .map_err(|e| e.to_string())?;
            println!("Report moved to position {}", to);
        }

        Some(Commands::Generate { index, prompt }) => {
            let id = resolve_index(&store, parse_index(&index)?)?;
            let existing = store
                .get(&id)
                .map(|r| r.content.clone())
                .unwrap_or_default();

            let generated = ai::generate(&prompt).await;
            let merged = ai::append_generated(&existing, &generated);

            let shared = Arc::new(Mutex::new(store));
            let mut autosave = Autosave::new(Arc::clone(&shared), id, role)
                .with_delay(Duration::from_millis(config.autosave_delay_ms));
            autosave.save_now(merged).map_err(|e| e.to_string())?;
            println!("Draft text appended");
        }

        Some(Commands::Summarize { index }) => {
            let id = resolve_index(&store, parse_index(&index)?)?;
            let existing = store
                .get(&id)
                .map(|r| r.content.clone())
                .unwrap_or_default();
            if existing.is_empty() {
                return Err("no content to summarize".to_string());
            }

            let summary = ai::summarize(&existing).await;
            let merged = ai::prepend_summary(&existing, &summary);

            let shared = Arc::new(Mutex::new(store));
            let mut autosave = Autosave::new(Arc::clone(&shared), id, role)
                .with_delay(Duration::from_millis(config.autosave_delay_ms));
            autosave.save_now(merged).map_err(|e| e.to_string())?;
            println!("Summary added");
        }
    }

    Ok(())
}

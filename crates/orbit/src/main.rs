//! `orbit` command-line tool.
//!
//! # Commands
//!
//! - `orbit interior <BLUEPRINT>` - Build an interior and print its scene tree
//! - `orbit export <SCENE_JSON>` - Plan a scene export
//! - `orbit libs` - Collect third-party DLLs

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use orbit::{
    collect, init_logging, load_scene_objects, plan_export, CollectorConfig, InteriorOptions,
    OrbitError, Result, Session, SessionConfig,
};

/// Content pipeline tools for Project Orbit
#[derive(Parser)]
#[command(name = "orbit")]
#[command(about = "Interior construction, scene export and library collection", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an interior from a blueprint and emit its scene tree as JSON
    Interior {
        /// Blueprint JSON file
        #[arg(name = "BLUEPRINT")]
        blueprint: PathBuf,

        /// Place floor and wall mesh instances
        #[arg(long)]
        meshes: bool,

        /// JSON file overriding construction options
        #[arg(long, value_name = "FILE")]
        options: Option<PathBuf>,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Split a scene into exported geometry and library metadata
    Export {
        /// JSON array of scene objects
        #[arg(name = "SCENE_JSON")]
        scene: PathBuf,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Copy known DLLs into debug and optimized folders
    Libs {
        /// Directory tree to scan
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,

        /// Output directory, recreated on every run
        #[arg(long, value_name = "DIR", default_value = "./library_lists")]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Interior {
            blueprint,
            meshes,
            options,
            out,
        } => {
            let options = match options {
                Some(path) => InteriorOptions::from_path(path)?,
                None => InteriorOptions::default(),
            };
            let mut session = Session::new(SessionConfig {
                blueprint_path: Some(blueprint),
                options: options.with_meshes(meshes),
            });
            let interior = session.construct()?;
            emit(&interior.to_json(), out.as_deref())
        }
        Commands::Export { scene, out } => {
            let objects = load_scene_objects(&scene)?;
            let plan = plan_export(&objects)?;
            match out {
                Some(path) => plan.write_json(path),
                None => emit(&plan.to_json(), None),
            }
        }
        Commands::Libs { root, out } => {
            collect(&CollectorConfig::new(root, out))?;
            Ok(())
        }
    }
}

fn emit(value: &serde_json::Value, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| OrbitError::file_access(path, e))?;
            log::info!("wrote '{}'", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

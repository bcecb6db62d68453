use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use maze_grid::GraphStats;
use maze_io::{SceneConfig, load_scene_from_path, save_obj};
use maze_mesh_cpu::SurfaceGroup;
use maze_runtime::Maze;

/// Grid maze graph and mesh builder
#[derive(Parser)]
#[command(name = "mazeworks", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the maze mesh for a scene and write it as OBJ
    Build {
        /// Scene file (TOML)
        scene: PathBuf,
        /// Output path; defaults to the scene path with an .obj extension
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the scene's cell size
        #[arg(long)]
        cell_size: Option<f32>,
        /// Synthesize the mesh on the rayon pool
        #[arg(long)]
        parallel: bool,
        /// Keep running and rebuild whenever the scene file changes
        #[arg(long)]
        watch: bool,
    },
    /// Print graph and mesh statistics for a scene
    Inspect {
        /// Scene file (TOML)
        scene: PathBuf,
    },
}

struct BuildOpts {
    scene: PathBuf,
    output: PathBuf,
    cell_size: Option<f32>,
    parallel: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let res = match cli.command {
        Commands::Build {
            scene,
            output,
            cell_size,
            parallel,
            watch,
        } => {
            let output = output.unwrap_or_else(|| scene.with_extension("obj"));
            let opts = BuildOpts {
                scene,
                output,
                cell_size,
                parallel,
            };
            if watch {
                watch_and_build(&opts)
            } else {
                build_once(&opts).map(|_| ())
            }
        }
        Commands::Inspect { scene } => inspect(&scene),
    };
    if let Err(e) = res {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_scene(path: &Path, cell_size: Option<f32>) -> Result<SceneConfig, Box<dyn Error>> {
    let mut cfg = load_scene_from_path(path)?;
    if let Some(s) = cell_size {
        cfg.cell_size = s;
        cfg.validate()?;
    }
    Ok(cfg)
}

fn build_once(opts: &BuildOpts) -> Result<Maze, Box<dyn Error>> {
    let t0 = Instant::now();
    let cfg = load_scene(&opts.scene, opts.cell_size)?;
    let mut maze = cfg.build_maze().with_parallel_mesh(opts.parallel);
    maze.rebuild();
    save_obj(maze.mesh(), &opts.output)?;
    log::info!(
        target: "perf",
        "ms={:.2} build scene={}",
        t0.elapsed().as_secs_f64() * 1000.0,
        opts.scene.display()
    );
    Ok(maze)
}

fn watch_and_build(opts: &BuildOpts) -> Result<(), Box<dyn Error>> {
    use notify::{EventKind, RecursiveMode, Watcher};

    // A failed first build is not fatal in watch mode; the next save may fix it.
    if let Err(e) = build_once(opts) {
        log::error!(target: "scene", "{}", e);
    }

    let (tx, rx) = crossbeam_channel::unbounded::<()>();
    let file_name = opts.scene.file_name().map(|n| n.to_os_string());
    let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        if let Ok(event) = res {
            let ours = event
                .paths
                .iter()
                .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
            match event.kind {
                EventKind::Modify(_) | EventKind::Create(_) | EventKind::Any if ours => {
                    let _ = tx.send(());
                }
                _ => {}
            }
        }
    })?;
    // Editors often replace the file on save, so watch its directory.
    let dir = match opts.scene.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    log::info!(target: "scene", "watching {}", opts.scene.display());

    while rx.recv().is_ok() {
        // Coalesce bursts of events from a single save.
        std::thread::sleep(Duration::from_millis(50));
        while rx.try_recv().is_ok() {}
        log::info!(target: "scene", "scene changed; rebuilding");
        if let Err(e) = build_once(opts) {
            log::error!(target: "scene", "{}", e);
        }
    }
    Ok(())
}

fn inspect(path: &Path) -> Result<(), Box<dyn Error>> {
    let cfg = load_scene(path, None)?;
    let mut maze = cfg.build_maze();
    let stats = maze.rebuild().clone();
    print_stats(&maze, &stats);
    Ok(())
}

fn print_stats(maze: &Maze, stats: &GraphStats) {
    println!("cell_size    {}", maze.cell_size());
    println!("cells        {}", stats.cells);
    println!("links        {} ({} adjacencies)", stats.links, stats.adjacencies());
    println!("collisions   {}", stats.collisions.len());
    for c in &stats.collisions {
        println!("  {} kept={:?} shadowed={:?}", c.coord, c.kept, c.shadowed);
    }
    let blocked: Vec<_> = maze.blocked_cells().collect();
    println!("blockers     {}", maze.blockers().len());
    println!("blocked      {}", blocked.len());
    let mesh = maze.mesh();
    println!(
        "mesh         {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    for g in SurfaceGroup::ALL {
        println!("  {:<10} {} quads", g.name(), mesh.group_quads(g));
    }
}

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use color_eyre::eyre::eyre;
use cube_core::{Color, Cube, Face};
use owo_colors::OwoColorize;
use recognition::{
    catalog::Catalog,
    phase::{self, PhaseResult},
    reconstruct::StateReconstructor,
    resolver::StateResolver,
};
use solver::{PathSolver, SolvePath, pipeline};

/// Recognizes partially observed cube states and finds solve paths
#[derive(Parser)]
#[command(version, about)]
enum Commands {
    /// Find solve paths from an observation (15 or 27 sticker letters)
    Solve {
        /// Sticker colors as W/Y/R/O/G/B letters, commas and spaces allowed
        stickers: String,
        /// An external algorithm catalog to merge over the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// How many paths to report
        #[arg(long, default_value_t = 5)]
        max_paths: usize,
        /// Emit the full result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Classify which solve phase an observation is in
    Phase {
        /// Sticker colors as W/Y/R/O/G/B letters, commas and spaces allowed
        stickers: String,
    },
    /// Look up which case of one algorithm set an observation shows
    Identify {
        /// Sticker colors as W/Y/R/O/G/B letters, commas and spaces allowed
        stickers: String,
        /// Which algorithm set to consult
        #[arg(long, default_value = "OLL")]
        set: String,
        /// How many near misses to report when nothing matches exactly
        #[arg(long, default_value_t = 3)]
        count: usize,
        /// An external algorithm catalog to merge over the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Apply an algorithm to a cube and print the resulting state
    Apply {
        /// The algorithm in face-turn notation, e.g. "R U R' U'"
        algorithm: String,
        /// A 54-sticker starting state in U D F B L R face order; solved
        /// when omitted
        #[arg(long)]
        label: Option<String>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    match Commands::parse() {
        Commands::Solve {
            stickers,
            catalog,
            max_paths,
            json,
        } => solve(&stickers, catalog.as_deref(), max_paths, json),
        Commands::Phase { stickers } => classify(&stickers),
        Commands::Identify {
            stickers,
            set,
            count,
            catalog,
        } => identify(&stickers, &set, count, catalog.as_deref()),
        Commands::Apply { algorithm, label } => apply(&algorithm, label.as_deref()),
    }
}

fn solve(
    stickers: &str,
    catalog: Option<&std::path::Path>,
    max_paths: usize,
    json: bool,
) -> color_eyre::Result<()> {
    let visible = pipeline::parse_stickers(stickers)?;
    let catalog = Arc::new(Catalog::load(catalog)?);
    let solver = PathSolver::new(Arc::clone(&catalog));

    match visible.len() {
        15 => {
            let paths = solver.solve(&visible, max_paths)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&paths)?);
            } else {
                print_phase(&phase::classify_partial(&visible));
                print_paths(&paths);
            }
        }
        27 => {
            let reconstructor = StateReconstructor::new(&catalog);
            let result = pipeline::run_pipeline(&visible, &reconstructor, &solver, max_paths);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }
            for error in &result.errors {
                eprintln!("{} {error}", "error:".red());
            }
            if let Some(state) = &result.state {
                let cube: Cube = format!(
                    "{}{}{}{}{}{}",
                    state.u, state.d, state.f, state.b, state.l, state.r
                )
                .parse()?;
                print_net(&cube);
            }
            if let Some(phase) = &result.phase {
                print_phase(phase);
            }
            print_paths(&result.paths);
            if !result.closest_matches.is_empty() {
                println!("No exact match; closest known states:");
                for near in &result.closest_matches {
                    println!(
                        "  {} + {} ({} stickers off)",
                        near.candidate.oll_case, near.candidate.pll_case, near.distance
                    );
                }
            }
        }
        n => {
            return Err(eyre!(
                "expected 15 or 27 sticker letters, got {n}; pass the top face \
                 plus the upper rows of the front and right faces, or the full \
                 three visible faces"
            ));
        }
    }

    Ok(())
}

fn classify(stickers: &str) -> color_eyre::Result<()> {
    let visible = pipeline::parse_stickers(stickers)?;
    let result = match visible.len() {
        15 => phase::classify_partial(&visible),
        27 => {
            let catalog = Catalog::builtin()?;
            let reconstructor = StateReconstructor::new(&catalog);
            let cube = reconstructor.reconstruct(&visible)?;
            print_net(&cube);
            phase::classify_full(&cube)
        }
        n => return Err(eyre!("expected 15 or 27 sticker letters, got {n}")),
    };
    print_phase(&result);
    Ok(())
}

fn identify(
    stickers: &str,
    set: &str,
    count: usize,
    catalog: Option<&std::path::Path>,
) -> color_eyre::Result<()> {
    let visible = pipeline::parse_stickers(stickers)?;
    let catalog = Catalog::load(catalog)?;
    if catalog.get_set(set).is_none() {
        return Err(eyre!(
            "no algorithm set named `{set}`; available: {}",
            catalog
                .sets()
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    let resolver = StateResolver::build(&catalog, &[set]);

    let exact = resolver.lookup(&visible, set)?;
    if let Some(m) = exact.first() {
        println!("{} {}", set.green(), m.case_name.bold());
        if !m.rotation.is_empty() {
            println!("  seen rotated by {}", m.rotation);
        }
        println!("  setup: {}", m.algorithm);
        println!("  solve: {}", m.algorithm.inverse());
        return Ok(());
    }

    println!("No exact {set} match; closest states:");
    for (m, distance) in resolver.find_closest(&visible, set, count)? {
        println!("  {} ({distance} stickers off)", m.case_name);
    }
    Ok(())
}

fn apply(algorithm: &str, label: Option<&str>) -> color_eyre::Result<()> {
    let mut cube = match label {
        Some(label) => label.parse()?,
        None => Cube::solved(),
    };
    cube.apply_str(algorithm)?;
    print_net(&cube);
    println!("facelets: {}", cube.facelet_string());
    print_phase(&phase::classify_full(&cube));
    Ok(())
}

fn print_phase(result: &PhaseResult) {
    println!(
        "phase: {} (confidence {:.2})",
        result.phase.bold(),
        result.confidence
    );
    if !result.applicable_sets.is_empty() {
        println!("applicable sets: {}", result.applicable_sets.join(", "));
    }
    if let Some(note) = &result.details.note {
        println!("note: {note}");
    }
}

fn print_paths(paths: &[SolvePath]) {
    if paths.is_empty() {
        println!("No verified solve paths found.");
        return;
    }
    for (i, path) in paths.iter().enumerate() {
        println!(
            "{} {} ({} moves)",
            format!("{}.", i + 1).bold(),
            path.description,
            path.total_moves
        );
        for step in &path.steps {
            println!(
                "   [{}] {}: {}",
                step.algorithm_set,
                step.case_name,
                step.algorithm
            );
        }
    }
}

fn colored(color: Color) -> String {
    let c = color.as_char();
    match color {
        Color::White => c.white().to_string(),
        Color::Yellow => c.yellow().to_string(),
        Color::Red => c.red().to_string(),
        Color::Orange => c.truecolor(255, 140, 0).to_string(),
        Color::Green => c.green().to_string(),
        Color::Blue => c.blue().to_string(),
    }
}

fn row(cube: &Cube, face: Face, r: usize) -> String {
    (0..3).map(|i| colored(cube[face][r * 3 + i])).collect()
}

/// Prints the cube as an unfolded net, L F R B across the middle.
fn print_net(cube: &Cube) {
    for r in 0..3 {
        println!("    {}", row(cube, Face::U, r));
    }
    for r in 0..3 {
        println!(
            "{} {} {} {}",
            row(cube, Face::L, r),
            row(cube, Face::F, r),
            row(cube, Face::R, r),
            row(cube, Face::B, r)
        );
    }
    for r in 0..3 {
        println!("    {}", row(cube, Face::D, r));
    }
}

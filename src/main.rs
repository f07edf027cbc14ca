use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cairn_blocks::{BlockRegistry, BlockType, Face};

mod assets;

#[derive(Parser)]
#[command(name = "cairn", version, about = "Inspect and validate voxel block sets")]
struct Cli {
    /// Directory containing assets/voxels/{textures,blocks}.toml
    #[arg(long, global = true)]
    assets: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the block set and report references the catalog cannot serve
    Check,
    /// List registered blocks with their flags
    List,
    /// Show one block's flags and per-face textures, or a single face
    Show {
        block: String,
        face: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let root = assets::resolve_assets_root(cli.assets);
    let textures_path = assets::textures_path(&root);
    let blocks_path = assets::blocks_path(&root);
    let reg = match BlockRegistry::load_from_paths(&textures_path, &blocks_path) {
        Ok(reg) => reg,
        Err(e) => {
            eprintln!("failed to load block set from {}: {}", root.display(), e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "loaded {} block(s), {} texture(s) from {}",
        reg.len(),
        reg.textures.textures.len(),
        root.display()
    );
    match cli.command {
        Command::Check => check(&reg),
        Command::List => {
            list(&reg);
            ExitCode::SUCCESS
        }
        Command::Show { block, face } => show(&reg, &block, face.as_deref()),
    }
}

fn check(reg: &BlockRegistry) -> ExitCode {
    let mut findings = 0usize;
    for ty in reg.iter() {
        for face in Face::ALL {
            let Some(key) = ty.texture_key_for(face) else {
                continue;
            };
            if reg.textures.get_id(key).is_none() {
                println!(
                    "{}: face {} references unknown texture {:?}",
                    ty.name,
                    face.key(),
                    key
                );
                findings += 1;
            }
        }
    }
    if findings == 0 {
        println!(
            "ok: {} block(s), {} texture(s)",
            reg.len(),
            reg.textures.textures.len()
        );
        ExitCode::SUCCESS
    } else {
        println!("{} finding(s)", findings);
        ExitCode::FAILURE
    }
}

fn list(reg: &BlockRegistry) {
    for ty in reg.iter() {
        println!("{:>5}  {:<16} {}", ty.id, ty.name, flag_summary(ty));
    }
}

fn show(reg: &BlockRegistry, name: &str, face: Option<&str>) -> ExitCode {
    let Some(ty) = reg.get_by_name(name) else {
        eprintln!("no block named {:?}", name);
        return ExitCode::FAILURE;
    };
    let faces: Vec<Face> = match face {
        Some(key) => match Face::parse(key) {
            Some(f) => vec![f],
            None => {
                eprintln!("unknown face key {:?} (expected py/ny/px/nx/pz/nz)", key);
                return ExitCode::FAILURE;
            }
        },
        None => Face::ALL.to_vec(),
    };
    println!("{} (id {})", ty.name, ty.id);
    println!("  flags: {}", flag_summary(ty));
    if ty.textures.is_none() {
        println!("  textures: none");
        return ExitCode::SUCCESS;
    }
    for face in faces {
        match ty.texture_key_for(face) {
            Some(key) => {
                let path = ty
                    .texture_cached(face)
                    .and_then(|tid| reg.textures.get(tid))
                    .and_then(|entry| entry.candidates.first());
                match path {
                    Some(p) => println!("  {} -> {} ({})", face.key(), key, p.display()),
                    None => println!("  {} -> {} (not in catalog)", face.key(), key),
                }
            }
            None => println!("  {} -> (undefined)", face.key()),
        }
    }
    ExitCode::SUCCESS
}

fn flag_summary(ty: &BlockType) -> String {
    let mut flags: Vec<&str> = Vec::new();
    if ty.is_empty() {
        flags.push("empty");
    }
    if ty.is_solid() {
        flags.push("solid");
    }
    if ty.is_fluid() {
        flags.push("fluid");
    }
    if ty.is_transparent() {
        flags.push("transparent");
    }
    if flags.is_empty() {
        "-".into()
    } else {
        flags.join(" ")
    }
}

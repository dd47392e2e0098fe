use crate::cli::{Cli, Commands};
use crate::map_engine::{BlockStore, IntMap, MappedBlock, SLOT_SIZE};
use crate::utils::{format_bytes, parse_block_size};
use std::path::Path;

/// Executes commands from the CLI against a block file.
///
/// Thin process wiring only: each invocation opens (or allocates) the block,
/// constructs the table around it, runs a single operation, and reports the
/// outcome as text. Every error path exits non-zero. All map semantics live in
/// [`IntMap`](crate::map_engine::IntMap); nothing here touches slot bytes.
pub fn execute_command(cli: &Cli) {
    match &cli.command {
        Commands::Create { slots, size } => {
            let len = match (slots, size) {
                (Some(slots), None) => slots * SLOT_SIZE as u64,
                (None, Some(size)) => parse_block_size(size).unwrap_or_else(|err| {
                    eprintln!("{}", err);
                    std::process::exit(1);
                }),
                _ => {
                    eprintln!("Error: specify exactly one of --slots or --size");
                    std::process::exit(1);
                }
            };

            if len < SLOT_SIZE as u64 {
                eprintln!(
                    "Error: {} bytes cannot hold a single {}-byte slot",
                    len, SLOT_SIZE
                );
                std::process::exit(1);
            }

            let block = MappedBlock::create(&cli.block, len).unwrap_or_else(|err| {
                eprintln!("Failed to allocate block: {}", err);
                std::process::exit(1);
            });

            println!(
                "Allocated {} ({} slots)",
                format_bytes(len),
                block.len() / SLOT_SIZE
            );
        }

        Commands::Put { key, value } => {
            let mut map = open_map(&cli.block);

            match map.put(*key, *value) {
                Ok(Some(previous)) => println!("{}", previous),
                Ok(None) => println!("none"),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }

            // Push the slot write through to the file before the mapping drops
            if let Err(e) = map.into_block().flush() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }

        Commands::Get { key } => {
            let map = open_map(&cli.block);

            match map.get(*key) {
                Ok(Some(value)) => println!("{}", value),
                Ok(None) => {
                    eprintln!("Error: Key '{}' not found", key);
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Info => {
            let block = MappedBlock::open(&cli.block).unwrap_or_else(|err| {
                eprintln!("Failed to open block file {:?}: {}", cli.block, err);
                std::process::exit(1);
            });

            let block_len = block.len();

            let map = IntMap::new(block, block_len).unwrap_or_else(|err| {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            });

            let occupied = map.occupied().unwrap_or_else(|err| {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            });

            println!("\n{:=^50}", " BLOCK INFO ");
            println!("{:<25} {:?}", "BLOCK FILE:", cli.block);
            println!("{:-<50}", ""); // Separator

            println!("{:<25} {}", "BLOCK SIZE:", format_bytes(block_len as u64));
            println!("{:<25} {}", "CAPACITY (SLOTS):", map.capacity());
            println!("{:<25} {}", "OCCUPIED SLOTS:", occupied);

            println!("{:=<50}", ""); // Footer
        }
    }
}

fn open_map(path: &Path) -> IntMap<MappedBlock> {
    let block = MappedBlock::open(path).unwrap_or_else(|err| {
        eprintln!("Failed to open block file {:?}: {}", path, err);
        std::process::exit(1);
    });

    let len = block.len();

    IntMap::new(block, len).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    })
}

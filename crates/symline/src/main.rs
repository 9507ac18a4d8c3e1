use std::process;

use clap::{Parser, Subcommand};
use symline_core::types::Address;
use symline_core::{find_process, InspectError, Inspector, Result as InspectResult};
use symline_utils::{info, init_logging};

/// Resolve a symbol in a running process to its source file and line.
#[derive(Parser, Debug)]
#[command(name = "symline")]
#[command(version)]
#[command(about = "Resolve a symbol in a running process to its source file and line", long_about = None)]
struct Cli
{
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Print the PID of the first running process matching an executable name
    Locate
    {
        /// Executable name to search for (case-insensitive, e.g. producer.exe)
        name: String,
    },
    /// Resolve a symbol in a process to its source file and line
    Resolve
    {
        /// Executable name of the target process (case-insensitive)
        name: String,
        /// Symbol to resolve; accepts mangled, demangled, or module!symbol form
        symbol: String,
    },
    /// Resolve an image address in a process to its source file and line
    ResolveAddr
    {
        /// Executable name of the target process (case-insensitive)
        name: String,
        /// Address to resolve (hex format: 0x1000 or decimal)
        address: Address,
    },
}

fn main()
{
    // Initialize logging (reads from RUST_LOG env var)
    // Defaults to INFO level and Pretty format if not set
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = run_command(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_command(cli: Cli) -> InspectResult<()>
{
    match cli.command {
        Commands::Locate { name } => {
            let pid = find_process(&name).ok_or(InspectError::ProcessNotFound(name))?;
            println!("{pid}");
            Ok(())
        }
        Commands::Resolve { name, symbol } => {
            let inspector = attach_by_name(&name)?;
            let location = inspector.line_for_symbol(&symbol)?;
            // Output contract: the file name, then the full location
            println!("{}", location.file);
            println!("{location}");
            Ok(())
        }
        Commands::ResolveAddr { name, address } => {
            let inspector = attach_by_name(&name)?;
            let location = inspector.line_for_address(address)?;
            println!("{}", location.file);
            println!("{location}");
            Ok(())
        }
    }
}

fn attach_by_name(name: &str) -> InspectResult<Inspector>
{
    let pid = find_process(name).ok_or_else(|| InspectError::ProcessNotFound(name.to_string()))?;
    info!("located '{}' as PID {}", name, pid);
    Inspector::attach(pid)
}

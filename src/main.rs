/*!
 * Allocator - Main Entry Point
 *
 * Contiguous-allocation simulator:
 * - One startup argument: total memory size in bytes
 * - Commands on stdin: RQ, RL, C, STAT, X
 * - Replies on stdout, structured logs on stderr
 */

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use contig_allocator::shell::{Shell, USAGE};
use contig_allocator::AddressSpace;

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let space = match startup(&args) {
        Ok(space) => space,
        Err(message) => {
            // a bad invocation is a normal termination, not a crash
            println!("{}", message);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    info!(total = space.total_memory(), "address space ready");
    println!(
        "The size of memory is initialized to {} bytes",
        space.total_memory()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let shell = Shell::new(space, stdin.lock(), stdout.lock());
    shell.run()?;

    info!("shutting down");
    Ok(())
}

/// Build the model from the command line: one size argument, in bytes
fn startup(args: &[String]) -> Result<AddressSpace, String> {
    if args.len() != 2 {
        return Err("Incorrect number of arguments.".to_string());
    }
    let total: usize = args[1]
        .parse()
        .map_err(|_| format!("Invalid memory size {:?}", args[1]))?;
    AddressSpace::with_capacity(total).map_err(|err| err.to_string())
}

/// Structured logging with env-filter; RUST_LOG overrides the info default
///
/// The tracing-log bridge forwards the model's `log` records into the same
/// subscriber. Logs go to stderr so stdout stays a clean reply stream.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

use tracing::error;

use crate::error::Error;

/// Print a fatal error and exit.
///
/// Crate errors show their user-facing message; `-v` adds the full cause
/// chain. Validation errors exit with 2, everything else with 1.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    let exit_code = match error.downcast_ref::<Error>() {
        Some(err) => {
            eprintln!("{}", err.user_message());
            err.exit_code()
        }
        None => {
            eprintln!("Error: {error}");
            1
        }
    };

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {i}: {cause}");
        }
    }

    std::process::exit(exit_code)
}

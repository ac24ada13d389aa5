use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::args::LogArgs;

/// Install the global tracing subscriber. `RUST_LOG` wins over `--log-filter`.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.filter));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if args.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {e}");
    }
}

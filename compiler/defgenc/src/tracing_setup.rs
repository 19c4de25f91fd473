//! Log output for the driver.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped stderr logger, filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, so normal runs pay nothing for
/// the instrumentation. Safe to call more than once.
///
/// ```text
/// RUST_LOG=defgen_eval=trace defgen regs.def
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

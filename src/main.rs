//! Binary entry point: open the data directory, load the three collections, and
//! drive the menu until the operator exits.
use gradebook::logging::init_logger;
use gradebook::{run_menu, Registry, Store};

/// Returning a `Result` bubbles up fatal startup problems (an unreadable data
/// directory or a corrupted collection file) to the terminal.
fn main() -> anyhow::Result<()> {
    init_logger();

    let store = Store::open_default()?;
    tracing::debug!(dir = %store.dir().display(), "starting gradebook");
    let mut registry = Registry::load(store)?;

    run_menu(&mut registry)
}

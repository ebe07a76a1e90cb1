//! Streaming demo: one signal, many chunk sizes, same output.
//!
//! Run with: RUST_LOG=debug cargo run -p ripple-core --features tracing --example stream_demo

use ripple_core::{EngineRegistry, Filter, FilterError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FilterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let signal: Vec<f32> = (0..48)
        .map(|n| (n as f32 * 0.4).sin() + if n % 7 == 0 { 0.5 } else { 0.0 })
        .collect();

    let registry = EngineRegistry::global();
    let mut reference = Filter::new(&[0.569, 1.1381, 0.569], &[1.0, 0.9428, 0.3333], true)?;
    let expected = registry.apply(&mut reference, &signal)?;
    tracing::info!(engine = registry.active()?.name(), "filtered whole signal");

    println!("{:<8} {:>10}", "chunk", "identical");
    println!("{:-<8} {:->10}", "", "");
    for chunk in [1, 2, 3, 5, 8, 13, 48] {
        let mut filter = reference.clone_fresh();
        let mut output = Vec::with_capacity(signal.len());
        for block in signal.chunks(chunk) {
            output.extend(registry.apply(&mut filter, block)?);
        }
        println!("{:<8} {:>10}", chunk, output == expected);
    }

    Ok(())
}

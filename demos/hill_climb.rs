//! Hill climbing on a symmetric 4-city instance.
//!
//! Run with `cargo run --example hill_climb [seed]`.

use u_search::distance::CostMatrix;
use u_search::local_search::{hill_climb, HillClimbConfig};
use u_search::SearchError;

fn main() -> Result<(), SearchError> {
    let costs = CostMatrix::from_rows(vec![
        vec![0.0, 400.0, 500.0, 300.0],
        vec![400.0, 0.0, 300.0, 500.0],
        vec![500.0, 300.0, 0.0, 400.0],
        vec![300.0, 500.0, 400.0, 0.0],
    ])?;

    let mut config = HillClimbConfig::default();
    if let Some(seed) = std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }

    let result = hill_climb(&costs, &config)?;
    println!("Best solution: {:?}", result.tour.cities());
    println!("Route length: {}", result.length);
    println!(
        "Started at {} and made {} improving moves (seed {:?})",
        result.initial_length, result.iterations, result.seed
    );
    Ok(())
}

//! Computes borders for the same skewed sample under each strategy

use binborders_core::{compute_borders, Strategy};

fn main() {
    // Exponential-like sample: dense near zero with a sparse high tail
    let sample: Vec<f64> = (0..1200).map(|i| (i as f64 / 150.0).exp() - 1.0).collect();

    for strategy in Strategy::ALL {
        println!("=== {} ===", strategy);
        let borders = compute_borders(&sample, strategy, 8).unwrap();
        println!("{}", borders);
        for (i, pair) in borders.edges().windows(2).enumerate() {
            println!("  bin {}: [{:10.3}, {:10.3})  width {:8.3}", i, pair[0], pair[1], pair[1] - pair[0]);
        }
        println!();
    }
}

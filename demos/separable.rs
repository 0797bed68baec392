//! Decision-region demo: trains a {2, 6, 2} classifier on a synthetic
//! two-class point cloud and renders the learned regions as a character
//! grid by sampling `predict` over the unit square.

use std::f64::consts::PI;

use ember_mlp::{Example, Network, Target};
use rand::Rng;

/// The wavy reference boundary the points are labeled against.
fn boundary(x: f64) -> f64 {
    ((x - 0.5) * PI).cos() * 0.75 * ((5.0 * PI * x).cos() + 1.75) / 2.0
}

fn main() {
    let mut rng = rand::thread_rng();

    let points: Vec<(f64, f64)> = (0..100)
        .map(|_| (rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();
    let examples: Vec<Example> = points
        .iter()
        .map(|&(x, y)| Example::with_class(vec![x, y], usize::from(y < boundary(x))))
        .collect();

    let mut net = Network::new(&[2, 6, 2]).expect("valid layer sizes");
    net.set_learning_rate(0.05);
    net.set_momentum(0.1);
    net.set_l2_decay(0.0);
    net.set_max_epochs(2000);
    net.set_max_loss(0.05);
    net.init(&mut rng);

    let report = net.train(&examples, &mut rng).expect("training failed");
    println!(
        "trained for {} epochs, max loss {:.4}{}",
        report.epochs,
        report.max_loss,
        if report.converged { " (converged)" } else { "" }
    );

    // Sample the unit square top to bottom; '#' marks class 1.
    let (cols, rows) = (64, 24);
    for r in 0..rows {
        let y = 1.0 - (r as f64 + 0.5) / rows as f64;
        let line: String = (0..cols)
            .map(|c| {
                let x = (c as f64 + 0.5) / cols as f64;
                match net.predict(&[x, y]).expect("prediction failed") {
                    0 => '.',
                    _ => '#',
                }
            })
            .collect();
        println!("{line}");
    }

    let correct = examples
        .iter()
        .filter(|e| {
            let class = match e.target() {
                Target::Class(c) => *c,
                Target::Vector(_) => unreachable!(),
            };
            net.predict(e.input()).expect("prediction failed") == class
        })
        .count();
    println!("{correct}/{} training points classified correctly", examples.len());
}

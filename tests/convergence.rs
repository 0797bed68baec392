use ember_mlp::{Example, Network, Target};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 100 linearly separable points with a margin around the diagonal,
/// labeled 1 when x1 > x2.
fn separable_examples(rng: &mut StdRng) -> Vec<Example> {
    let mut examples = Vec::with_capacity(100);
    while examples.len() < 100 {
        let x1: f64 = rng.gen();
        let x2: f64 = rng.gen();
        if (x1 - x2).abs() < 0.1 {
            continue;
        }
        examples.push(Example::with_class(vec![x1, x2], usize::from(x1 > x2)));
    }
    examples
}

#[test]
fn training_converges_on_a_separable_set() {
    let mut rng = StdRng::seed_from_u64(1234);
    let examples = separable_examples(&mut rng);

    let mut net = Network::new(&[2, 6, 2]).unwrap();
    net.set_learning_rate(0.3);
    net.set_momentum(0.5);
    net.set_l2_decay(0.0);
    net.set_batch_size(1);
    net.set_max_epochs(200);
    net.set_max_loss(0.1);
    net.init(&mut rng);

    let report = net.train(&examples, &mut rng).unwrap();
    assert!(
        report.converged,
        "did not reach max loss 0.1 in {} epochs (last max loss {})",
        report.epochs, report.max_loss
    );
    assert!(report.max_loss <= 0.1);
    assert!(report.epochs <= 200);

    // Every training point lands on the right side of the learned boundary.
    for example in &examples {
        let class = match example.target() {
            Target::Class(c) => *c,
            _ => unreachable!(),
        };
        assert_eq!(net.predict(example.input()).unwrap(), class);
    }
}

#[test]
fn retraining_after_reinit_converges_again() {
    let mut rng = StdRng::seed_from_u64(99);
    let examples = separable_examples(&mut rng);

    let mut net = Network::new(&[2, 6, 2]).unwrap();
    net.set_learning_rate(0.3);
    net.set_momentum(0.5);
    net.set_l2_decay(0.0);
    net.set_max_epochs(200);
    net.set_max_loss(0.1);

    net.init(&mut rng);
    let first = net.train(&examples, &mut rng).unwrap();
    assert!(first.converged);

    // init() resets weights, accumulators, and the batch counter.
    net.init(&mut rng);
    let second = net.train(&examples, &mut rng).unwrap();
    assert!(second.converged);
}

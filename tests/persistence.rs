use ember_mlp::{Example, Network};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn saved_and_loaded_networks_behave_identically() {
    let mut rng = StdRng::seed_from_u64(7);

    let mut net = Network::new(&[3, 5, 2]).unwrap();
    net.set_learning_rate(0.1);
    net.set_momentum(0.3);
    net.set_l2_decay(0.01);
    net.set_batch_size(2);
    net.set_max_epochs(5);
    net.set_max_loss(1e-12);
    net.init(&mut rng);

    let examples = vec![
        Example::with_class(vec![0.1, 0.5, 0.9], 0),
        Example::with_class(vec![0.9, 0.5, 0.1], 1),
        Example::with_class(vec![0.3, 0.3, 0.3], 0),
    ];
    net.train(&examples, &mut rng).unwrap();

    let path = std::env::temp_dir().join("ember_mlp_persistence_test.json");
    let path = path.to_str().unwrap();
    net.save_json(path).unwrap();
    let mut restored = Network::load_json(path).unwrap();
    std::fs::remove_file(path).ok();

    assert_eq!(restored.sizes(), net.sizes());
    assert_eq!(restored.learning_rate(), net.learning_rate());
    assert_eq!(restored.momentum(), net.momentum());
    assert_eq!(restored.l2_decay(), net.l2_decay());
    assert_eq!(restored.batch_size(), net.batch_size());
    assert_eq!(restored.max_epochs(), net.max_epochs());
    assert_eq!(restored.hidden_activation(), net.hidden_activation());
    assert_eq!(restored.output_policy(), net.output_policy());

    // serde_json round-trips f64 exactly, so outputs must match bit for bit.
    for input in [[0.1, 0.5, 0.9], [0.9, 0.5, 0.1], [0.2, 0.8, 0.4]] {
        assert_eq!(restored.forward(&input).unwrap(), net.forward(&input).unwrap());
    }
}

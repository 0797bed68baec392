//! Bitmap classification harness: each image file passed on the command
//! line becomes one training example, its class given by argument position.
//! Trains a single-boundary softmax net on the pixel features, then
//! re-classifies every file.

use ember_mlp::{features, Example, Network};

const WIDTH: u32 = 16;
const HEIGHT: u32 = 16;

fn main() {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.len() < 2 {
        eprintln!("usage: digits <image> <image> [image ...]");
        eprintln!("each image becomes one class, in argument order");
        std::process::exit(1);
    }

    let mut examples = Vec::new();
    for (class, path) in paths.iter().enumerate() {
        match features::rgb_features(path, WIDTH, HEIGHT) {
            Ok(input) => examples.push(Example::with_class(input, class)),
            Err(e) => {
                eprintln!("{path}: {e}");
                std::process::exit(1);
            }
        }
    }

    let input_size = (WIDTH * HEIGHT * 3) as usize;
    let mut net = Network::new(&[input_size, paths.len()]).expect("valid layer sizes");
    net.set_learning_rate(0.01);
    net.set_momentum(0.1);
    net.set_l2_decay(0.001);
    net.set_max_epochs(1000);
    net.set_max_loss(1e-4);

    let mut rng = rand::thread_rng();
    net.init(&mut rng);

    let report = net.train(&examples, &mut rng).expect("training failed");
    println!(
        "trained for {} epochs, max loss {:.6}{}",
        report.epochs,
        report.max_loss,
        if report.converged { " (converged)" } else { "" }
    );

    for (class, (path, example)) in paths.iter().zip(examples.iter()).enumerate() {
        let predicted = net.predict(example.input()).expect("prediction failed");
        let marker = if predicted == class { "ok" } else { "MISS" };
        println!("{path}: class {class} -> predicted {predicted} [{marker}]");
    }
}

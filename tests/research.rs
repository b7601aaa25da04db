use probdist::prelude::*;

use rand::prelude::*;
use rand_distr::Normal;

use std::io::Write;


const SEED: u64 = 1234;


/// Two isotropic Gaussian clouds in the plane,
/// centered at `(0, 0)` and `(5, 5)`.
fn gaussian_clouds(n_per_label: usize) -> Vec<Instance<&'static str>> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let noise = Normal::new(0.0, 1.0).unwrap();

    let mut sample = Vec::with_capacity(2 * n_per_label);
    for (center, label) in [(0.0, "low"), (5.0, "high")] {
        for _ in 0..n_per_label {
            let x = center + noise.sample(&mut rng);
            let y = center + noise.sample(&mut rng);
            sample.push(Instance::new(vec![x, y], label));
        }
    }
    sample
}


#[test]
fn classifiers_separate_gaussian_clouds() {
    let (train, test) = train_test_split(
        gaussian_clouds(100), DEFAULT_TRAIN_RATIO, SEED
    );
    assert_eq!(train.len(), 134);
    assert_eq!(test.len(), 66);

    let mut knn = KNNClassifier::new();
    knn.fit(train.clone()).unwrap();
    let mut nb = GaussianNB::new();
    nb.fit(train.clone()).unwrap();
    let mut tree = DecisionTreeClassifier::new();
    tree.fit(train).unwrap();

    assert_accurate(&knn, &test);
    assert_accurate(&nb, &test);
    assert_accurate(&tree, &test);
}


fn assert_accurate<C>(classifier: &C, test: &[Instance<&'static str>])
    where C: Classifier<&'static str> + Sync,
{
    let acc = accuracy(classifier, test).unwrap();
    println!("{}: {acc:.2}%", classifier.name());
    assert!(acc > 90.0, "{}: {acc}", classifier.name());
}


#[test]
fn cross_validation_of_naive_bayes() {
    let sample = gaussian_clouds(50);
    let cv = CrossValidation::new(&sample)
        .n_folds(5)
        .seed(SEED)
        .verbose(true)
        .shuffle();

    let mut n_fold = 0;
    for (train, test) in cv {
        assert_eq!(train.len() + test.len(), 100);

        let mut nb = GaussianNB::new();
        nb.fit(train).unwrap();
        assert!(accuracy(&nb, &test).unwrap() > 85.0);
        n_fold += 1;
    }
    assert_eq!(n_fold, 5);
}


#[test]
fn k_sweep_over_gaussian_clouds() {
    let (train, test) = train_test_split(gaussian_clouds(60), 0.7, SEED);
    let report = KSweep::new(&train, &test)
        .verbose(true)
        .run()
        .unwrap();

    let ks = report.iter().map(|&(k, _)| k).collect::<Vec<_>>();
    assert_eq!(ks, (1..=10).collect::<Vec<_>>());
    assert!(report.iter().all(|&(_, acc)| acc > 85.0));
}


#[test]
fn read_csv_then_classify() {
    let path = std::env::temp_dir().join("probdist_reader_test.csv");
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "index,sepal,petal,species").unwrap();
        for i in 0..6 {
            let x = i as f64 * 0.1;
            writeln!(file, "{i},{:.1},{:.1},small", 1.0 + x, 0.5 + x).unwrap();
            writeln!(file, "{},{:.1},{:.1},large", i + 6, 7.0 + x, 5.0 + x).unwrap();
        }
    }

    let sample = InstanceReader::new()
        .file(&path)
        .has_header(true)
        .has_index_column(true)
        .read()
        .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(sample.len(), 12);
    assert_eq!(sample[0].n_features(), 2);

    let mut nb = GaussianNB::new();
    nb.fit(sample).unwrap();
    let label = nb.classify(&Instance::unlabeled(vec![7.2, 5.1])).unwrap();
    assert_eq!(label, "large");
}

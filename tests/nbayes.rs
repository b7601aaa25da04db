use probdist::prelude::*;
use probdist::Probability;


#[test]
fn naive_bayes_scenario() {
    let sample = vec![
        Instance::new(vec![1.0], "A"),
        Instance::new(vec![2.0], "A"),
        Instance::new(vec![3.0], "A"),
        Instance::new(vec![10.0], "B"),
        Instance::new(vec![11.0], "B"),
        Instance::new(vec![12.0], "B"),
    ];
    let mut nb = GaussianNB::new();
    nb.fit(sample).unwrap();

    let dist = nb.prob_dist(&Instance::unlabeled(vec![2.0])).unwrap();
    assert_eq!(*dist.top(), "A");
    assert!(dist.top_probability() > 0.5);

    let total = dist.iter().map(|(_, p)| p).sum::<f64>();
    assert!((total - 1.0).abs() < 1e-9);
}


#[test]
fn summaries_hold_mean_and_std() {
    let sample = vec![
        Instance::new(vec![2.0, 0.0], 'a'),
        Instance::new(vec![4.0, 0.0], 'a'),
        Instance::new(vec![6.0, 3.0], 'b'),
        Instance::new(vec![8.0, 5.0], 'b'),
    ];
    let mut nb = GaussianNB::new();
    nb.fit(sample).unwrap();

    let summaries = nb.summaries().unwrap();
    assert_eq!(summaries.len(), 2);

    let (label, gaussian) = &summaries[0];
    assert_eq!(*label, 'a');
    assert_eq!(gaussian.means(), &[3.0, 0.0]);
    assert!((gaussian.std_devs()[0] - 2f64.sqrt()).abs() < 1e-12);
    assert_eq!(gaussian.std_devs()[1], 0.0);

    // The pseudocount keeps the zero deviation usable.
    assert!(gaussian.log_probability(&[3.0, 0.0]).is_finite());
}


#[test]
fn unequal_dimension() {
    let sample = vec![
        Instance::new(vec![1.0, 1.0], 0),
        Instance::new(vec![1.5, 1.0], 0),
    ];
    let mut nb = GaussianNB::new();
    nb.fit(sample).unwrap();

    let err = nb.prob_dist(&Instance::unlabeled(vec![1.0])).unwrap_err();
    assert!(matches!(
        err,
        ClassifierError::DimensionMismatch { expected: 2, got: 1 }
    ));
}

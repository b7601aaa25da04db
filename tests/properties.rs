use probdist::prelude::*;
use probdist::Node;

use proptest::prelude::*;
use proptest::test_runner::{Config, TestCaseError};


const N_LABEL: usize = 3;


fn sample_strategy() -> impl Strategy<Value = Vec<Instance<usize>>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 6..40)
        .prop_map(|points| {
            points.into_iter()
                .enumerate()
                .map(|(i, (x, y))| Instance::new(vec![x, y], i % N_LABEL))
                .collect()
        })
}


fn query_strategy() -> impl Strategy<Value = Instance<usize>> {
    (-150.0f64..150.0, -150.0f64..150.0)
        .prop_map(|(x, y)| Instance::unlabeled(vec![x, y]))
}


fn check_distribution<C>(classifier: &C, x: &Instance<usize>)
    -> Result<(), TestCaseError>
    where C: Classifier<usize>,
{
    let dist = classifier.prob_dist(x)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;

    let total = dist.iter().map(|(_, p)| p).sum::<f64>();
    prop_assert!((total - 1.0).abs() < 1e-6, "sum = {total}");
    prop_assert!(dist.iter().all(|(_, p)| p >= 0.0));

    let probs = dist.iter().map(|(_, p)| p).collect::<Vec<_>>();
    prop_assert!(probs.windows(2).all(|w| w[0] >= w[1]));

    let top = *dist.top();
    let label = classifier.classify(x)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(label, top);
    Ok(())
}


fn max_leaf_depth(node: &Node<usize>) -> usize {
    match node {
        Node::Leaf(_) => 0,
        Node::Branch(b) => 1 + max_leaf_depth(b.left()).max(max_leaf_depth(b.right())),
    }
}


proptest! {
    #![proptest_config(Config::with_cases(64))]

    #[test]
    fn prop_knn_distribution(
        sample in sample_strategy(),
        x in query_strategy(),
        k in 1usize..6,
    ) {
        let mut knn = KNNClassifier::with_k(k);
        knn.fit(sample).unwrap();
        check_distribution(&knn, &x)?;
    }

    #[test]
    fn prop_knn_all_distribution(
        sample in sample_strategy(),
        x in query_strategy(),
    ) {
        let mut knn = KNNClassifier::new();
        knn.fit(sample).unwrap();
        check_distribution(&knn, &x)?;
    }

    #[test]
    fn prop_nbayes_distribution(
        sample in sample_strategy(),
        x in query_strategy(),
    ) {
        let mut nb = GaussianNB::new();
        nb.fit(sample).unwrap();
        check_distribution(&nb, &x)?;
    }

    #[test]
    fn prop_dtree_distribution(
        sample in sample_strategy(),
        x in query_strategy(),
    ) {
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(sample).unwrap();
        check_distribution(&tree, &x)?;
    }

    #[test]
    fn prop_dtree_depth_is_bounded(
        sample in sample_strategy(),
        max_depth in 1usize..5,
    ) {
        let mut tree = DecisionTreeBuilder::new()
            .max_depth(max_depth)
            .build();
        tree.fit(sample).unwrap();

        let root = tree.root().unwrap();
        prop_assert!(max_leaf_depth(root) <= max_depth);
        prop_assert_eq!(root.depth(), max_leaf_depth(root));
    }

    #[test]
    fn prop_dtree_is_deterministic(sample in sample_strategy()) {
        let mut a = DecisionTreeClassifier::new();
        a.fit(sample.clone()).unwrap();
        let mut b = DecisionTreeClassifier::new();
        b.fit(sample).unwrap();

        prop_assert_eq!(a.root(), b.root());
    }
}

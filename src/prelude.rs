//! Exports the classifiers, the traits, and the helpers
//! needed to train and evaluate them.
//! 
pub use crate::classifier::Classifier;


pub use crate::{
    // Data -------------------------------------
    Instance,
    ProbDist,
    LabelTally,
    ClassifierError,


    // Classifiers ------------------------------
    KNNClassifier,
    KNNConfig,
    Neighbors,

    GaussianNB,

    DecisionTreeBuilder,
    DecisionTreeClassifier,
};


pub use crate::sample::{
    InstanceReader,
    from_dataframe,
    train_test_split,
    DEFAULT_TRAIN_RATIO,
};


pub use crate::research::{
    accuracy,
    CrossValidation,
    KSweep,
};

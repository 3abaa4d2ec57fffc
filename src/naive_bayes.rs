/*!
Gaussian Naïve Bayes classification

# Naïve Bayes

The naïve bayes assumption is that all features in the labelled data are independent of each other
given the class they correspond to. This means the probability of some input given a class
can be computed as the product of each individual feature in that input conditioned on that class.

By Baye's Theorum we can relate the probability of the class given the input to the probability
of the input given the class. As a classifier only needs to determine which class some input
is most likely to be we can compare just the product of the probability of the input given a class
and the probability of that class.

## Bayes' Theorum

posterior = ( prior x likelihood ) / evidence

P(C<sub>k</sub> | **x**) = ( P(C<sub>k</sub>) * P(**x** | C<sub>k</sub>) ) / P(**x**)

P(C<sub>k</sub> | **x**) ∝ P(C<sub>k</sub>) * P(**x** | C<sub>k</sub>)

where C<sub>k</sub> is the kth class and **x** is the input to classify.

Given the naïve bayes assumption

P(C<sub>k</sub> | **x**) ∝ P(C<sub>k</sub>) * the product over all i features of P(x<sub>i</sub> | C<sub>k</sub>)

## Gaussian features

Every feature is modelled, separately for each class, as a [Gaussian](crate::distributions::Gaussian)
with the mean and population variance of the training rows of that class. P(x<sub>i</sub> | C<sub>k</sub>)
is then the Gaussian probability density of x<sub>i</sub>. The prior P(C<sub>k</sub>) is the
fraction of training rows labelled C<sub>k</sub>.

The product is computed directly rather than as a sum of logarithms, so very many features or
very unlikely inputs can underflow every posterior to 0. When that happens, or when several
classes otherwise score exactly the same, the class that sorts first wins.

## Zero variance

If every training row of a class has the same value for some feature, that feature's variance
for the class is 0 and its density is undefined. [ZeroVariance] decides what happens: by default
the variance used for the density is floored to a small positive value.

# Example

```
use gaussian_bayes::matrices::Matrix;
use gaussian_bayes::naive_bayes::GaussianNaiveBayes;

let samples = Matrix::from(vec![
    vec![1.0, 2.0],
    vec![1.2, 1.8],
    vec![0.8, 2.2],
    vec![5.0, 7.0],
    vec![5.3, 6.8],
    vec![4.9, 7.3],
]);
let labels = ["small", "small", "small", "large", "large", "large"];

let model = GaussianNaiveBayes::default().fit(&samples, &labels).unwrap();
// classes are enumerated in sorted order
assert_eq!(model.classes(), &["large", "small"]);

let unseen = Matrix::from(vec![
    vec![1.1, 2.0],
    vec![5.1, 7.1],
]);
assert_eq!(model.predict(&unseen).unwrap(), vec!["small", "large"]);
```
*/

use crate::distributions::Gaussian;
use crate::matrices::{Column, Matrix, Row};
use crate::numeric::extra::Real;

use log::{debug, trace, warn};

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

/**
 * How the likelihood treats a class and feature whose training values were all identical,
 * giving a variance of exactly 0.
 *
 * The fitted [parameters](FittedGaussianNaiveBayes::parameters) always keep the exact
 * variance, this only changes the variance the density is computed with.
 */
#[derive(Clone, Debug, PartialEq)]
pub enum ZeroVariance<T> {
    /**
     * Compute the density with the raw variance. A variance of 0 divides by zero, which
     * makes the posterior of that class NaN for every input. A NaN posterior is then
     * treated as the largest, so the first class with one is chosen.
     */
    Propagate,
    /**
     * Compute the density with the larger of the fitted variance and `minimum`. Any NaN
     * posterior that still occurs, such as from infinite training values, loses to every
     * number.
     */
    Floor { minimum: T },
}

impl Default for ZeroVariance<f64> {
    fn default() -> Self {
        ZeroVariance::Floor { minimum: 1e-9 }
    }
}

impl Default for ZeroVariance<f32> {
    fn default() -> Self {
        ZeroVariance::Floor { minimum: 1e-6 }
    }
}

impl<T: Real> ZeroVariance<T> {
    fn adjust(&self, variance: &T) -> T {
        match self {
            ZeroVariance::Floor { minimum } if variance < minimum => minimum.clone(),
            _ => variance.clone(),
        }
    }
}

/**
 * The settings for fitting a Gaussian Naïve Bayes classifier.
 *
 * Fitting does not modify the settings, so one value can fit any number of models.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianNaiveBayes<T> {
    pub zero_variance: ZeroVariance<T>,
}

impl<T> Default for GaussianNaiveBayes<T>
where
    ZeroVariance<T>: Default,
{
    fn default() -> Self {
        GaussianNaiveBayes {
            zero_variance: ZeroVariance::default(),
        }
    }
}

impl<T> GaussianNaiveBayes<T> {
    pub fn new(zero_variance: ZeroVariance<T>) -> GaussianNaiveBayes<T> {
        GaussianNaiveBayes { zero_variance }
    }
}

impl<T: Real> GaussianNaiveBayes<T> {
    /**
     * Estimates the per class, per feature Gaussian parameters from a dataset with one sample
     * per row of `samples` and the class of each row in `labels`.
     *
     * The distinct labels become the classes of the model, enumerated in ascending order.
     *
     * Result::Err is returned if there is not exactly one label per row.
     */
    pub fn fit<L>(
        &self,
        samples: &Matrix<T>,
        labels: &[L],
    ) -> Result<FittedGaussianNaiveBayes<T, L>, NaiveBayesError>
    where
        L: Clone + Ord,
    {
        if samples.rows() != labels.len() {
            return Err(NaiveBayesError::LabelCountMismatch {
                samples: samples.rows(),
                labels: labels.len(),
            });
        }
        let classes: Vec<L> = labels
            .iter()
            .cloned()
            .collect::<BTreeSet<L>>()
            .into_iter()
            .collect();

        let mut parameters = Vec::with_capacity(classes.len());
        for (class_index, class) in classes.iter().enumerate() {
            let rows: Vec<Row> = labels
                .iter()
                .enumerate()
                .filter(|(_, label)| *label == class)
                .map(|(row, _)| row)
                .collect();
            if rows.is_empty() {
                return Err(NaiveBayesError::EmptyClassSubset { class: class_index });
            }
            let subset = samples.select_rows(&rows);
            let features = (0..subset.columns())
                .map(|feature| {
                    let gaussian = Gaussian::approximating(subset.column_iter(feature));
                    if gaussian.variance == T::zero() {
                        warn!(
                            "Feature {} has zero variance in class {} ({} rows)",
                            feature,
                            class_index,
                            rows.len()
                        );
                    }
                    gaussian
                })
                .collect();
            parameters.push(features);
        }

        debug!(
            "Fitted Gaussian Naive Bayes to {} samples with {} features and {} classes",
            samples.rows(),
            samples.columns(),
            classes.len()
        );
        Ok(FittedGaussianNaiveBayes {
            classes,
            labels: labels.to_vec(),
            features: samples.columns(),
            parameters,
            zero_variance: self.zero_variance.clone(),
        })
    }
}

/**
 * A Gaussian Naïve Bayes classifier fitted to a labelled dataset.
 *
 * The model can only be created by [fitting](GaussianNaiveBayes::fit) and is never modified
 * afterwards, so it can be shared between threads to predict concurrently.
 */
#[derive(Clone, Debug)]
pub struct FittedGaussianNaiveBayes<T, L> {
    classes: Vec<L>,
    labels: Vec<L>,
    features: Column,
    parameters: Vec<Vec<Gaussian<T>>>,
    zero_variance: ZeroVariance<T>,
}

impl<T, L> FittedGaussianNaiveBayes<T, L> {
    /**
     * The distinct labels seen when fitting, in ascending order. All per class values of
     * this model are indexed in this order.
     */
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /**
     * The Gaussian of each feature for each class, indexed by class then by feature.
     */
    pub fn parameters(&self) -> &[Vec<Gaussian<T>>] {
        &self.parameters
    }

    /**
     * The number of features each sample must have.
     */
    pub fn features(&self) -> Column {
        self.features
    }

    /**
     * The zero variance policy the likelihood is computed with, copied from the settings
     * this model was fitted with.
     */
    pub fn zero_variance(&self) -> &ZeroVariance<T> {
        &self.zero_variance
    }
}

impl<T: Real, L: Clone + Ord> FittedGaussianNaiveBayes<T, L> {
    /**
     * The prior probability of a class, the fraction of training rows with that label.
     *
     * This is counted from the training labels each time it is called. Returns None if the
     * label was not seen when fitting.
     */
    pub fn prior(&self, class: &L) -> Option<T> {
        self.classes
            .binary_search(class)
            .ok()
            .map(|_| self.count_prior(class))
    }

    fn count_prior(&self, class: &L) -> T {
        let mut matching = T::zero();
        let mut total = T::zero();
        for label in &self.labels {
            total = total + T::one();
            if label == class {
                matching = matching + T::one();
            }
        }
        matching / total
    }

    /**
     * P(x | C) for a single feature, the density of the class's Gaussian for that feature
     * after applying the [ZeroVariance] policy.
     */
    fn likelihood(&self, parameters: &Gaussian<T>, x: &T) -> T {
        Gaussian::new(
            parameters.mean.clone(),
            self.zero_variance.adjust(&parameters.variance),
        )
        .probability(x)
    }

    /**
     * Computes the unnormalised posterior P(C) * P(x<sub>1</sub> | C) * ... * P(x<sub>n</sub> | C)
     * of each class for a sample, in the same order as [classes](Self::classes).
     *
     * Result::Err is returned if the sample does not have one value per feature.
     */
    pub fn posteriors(&self, sample: &[T]) -> Result<Vec<T>, NaiveBayesError> {
        self.check_features(sample.len())?;
        Ok(self
            .classes
            .iter()
            .zip(self.parameters.iter())
            .map(|(class, features)| {
                features
                    .iter()
                    .zip(sample.iter())
                    .fold(self.count_prior(class), |posterior, (parameters, x)| {
                        posterior * self.likelihood(parameters, x)
                    })
            })
            .collect())
    }

    /**
     * Classifies a sample as the class with the largest posterior.
     *
     * When several classes have exactly the same posterior the first of them in
     * [classes](Self::classes) is returned. How NaN posteriors compare depends on the
     * [ZeroVariance] policy: under `Propagate` the first NaN is the largest, under `Floor`
     * a NaN never beats a number. If every posterior is NaN the first class is returned.
     *
     * Result::Err is returned if the sample does not have one value per feature.
     */
    pub fn classify(&self, sample: &[T]) -> Result<L, NaiveBayesError> {
        let posteriors = self.posteriors(sample)?;
        let nan_is_largest = matches!(self.zero_variance, ZeroVariance::Propagate);
        let mut best: Option<(usize, T)> = None;
        for (index, posterior) in posteriors.into_iter().enumerate() {
            let better = match &best {
                None => true,
                Some((_, maximum)) if maximum.is_not_a_number() => {
                    !nan_is_largest && !posterior.is_not_a_number()
                }
                Some((_, maximum)) => {
                    posterior > *maximum || (nan_is_largest && posterior.is_not_a_number())
                }
            };
            if better {
                best = Some((index, posterior));
            }
        }
        // a fitted model always has at least one class
        let index = best.map(|(index, _)| index).unwrap_or(0);
        trace!("Classified sample as class {}", index);
        Ok(self.classes[index].clone())
    }

    /**
     * Classifies every row of `samples`, returning the predicted classes in row order.
     *
     * Result::Err is returned if the samples do not have one column per feature.
     */
    pub fn predict(&self, samples: &Matrix<T>) -> Result<Vec<L>, NaiveBayesError> {
        self.check_features(samples.columns())?;
        (0..samples.rows())
            .map(|row| self.classify(samples.row_slice(row)))
            .collect()
    }

    fn check_features(&self, actual: Column) -> Result<(), NaiveBayesError> {
        if actual != self.features {
            return Err(NaiveBayesError::ShapeMismatch {
                expected: self.features,
                actual,
            });
        }
        Ok(())
    }
}

/**
 * An error from fitting or using a Gaussian Naïve Bayes classifier.
 */
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NaiveBayesError {
    /**
     * A sample had a different number of features to the training data.
     */
    ShapeMismatch { expected: Column, actual: Column },
    /**
     * A class had no training rows, identified by its index in the class order.
     */
    EmptyClassSubset { class: usize },
    /**
     * The training data did not have exactly one label per row.
     */
    LabelCountMismatch { samples: Row, labels: usize },
}

impl fmt::Display for NaiveBayesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaiveBayesError::ShapeMismatch { expected, actual } => write!(
                f,
                "Sample has {} features but the model was fitted with {}",
                actual, expected
            ),
            NaiveBayesError::EmptyClassSubset { class } => {
                write!(f, "Class {} has no training samples", class)
            }
            NaiveBayesError::LabelCountMismatch { samples, labels } => write!(
                f,
                "Training data has {} samples but {} labels",
                samples, labels
            ),
        }
    }
}

impl Error for NaiveBayesError {}

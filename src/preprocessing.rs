/*!
Preparing datasets for a classifier and scoring its predictions.

# Example

Splitting a dataset in half without shuffling, then scoring predictions on the second half.

```
use gaussian_bayes::matrices::Matrix;
use gaussian_bayes::naive_bayes::GaussianNaiveBayes;
use gaussian_bayes::preprocessing::{accuracy_score, normalize, train_test_split};

let samples = normalize(&Matrix::from(vec![
    vec![9.0, 1.0], vec![1.0, 9.0],
    vec![8.0, 1.5], vec![1.5, 8.0],
    vec![9.5, 0.5], vec![0.5, 9.5],
    vec![8.5, 1.0], vec![1.0, 8.5],
]));
let labels = vec![0, 1, 0, 1, 0, 1, 0, 1];

let split = train_test_split(&samples, &labels, 0.5, None).unwrap();
let model = GaussianNaiveBayes::default()
    .fit(&split.training_samples, &split.training_labels)
    .unwrap();
let predictions = model.predict(&split.testing_samples).unwrap();
let accuracy: f64 = accuracy_score(&split.testing_labels, &predictions).unwrap();
assert_eq!(accuracy, 1.0);
```
*/

use crate::matrices::{Matrix, Row};
use crate::numeric::extra::Real;
use crate::numeric::Numeric;

use std::error::Error;
use std::fmt;

/**
 * Scales every row of a matrix to have an L2 norm (euclidean length) of 1.
 *
 * Rows that are entirely zero are left unchanged.
 */
pub fn normalize<T: Real>(samples: &Matrix<T>) -> Matrix<T> {
    let mut data = Vec::with_capacity(samples.rows() * samples.columns());
    for row in 0..samples.rows() {
        let norm = samples
            .row_iter(row)
            .map(|x| x.clone() * x)
            .fold(T::zero(), |sum, x| sum + x)
            .sqrt();
        if norm == T::zero() {
            data.extend(samples.row_iter(row));
        } else {
            data.extend(samples.row_iter(row).map(|x| x / norm.clone()));
        }
    }
    Matrix::from_flat_row_major(samples.size(), data)
}

/**
 * A dataset split into a part to fit a model on and a part to test it with.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct Split<T, L> {
    pub training_samples: Matrix<T>,
    pub training_labels: Vec<L>,
    pub testing_samples: Matrix<T>,
    pub testing_labels: Vec<L>,
}

/**
 * Splits a dataset with one label per row into training and testing parts.
 *
 * `test_proportion` of the rows, rounded down, go to the testing part, taken from the end of
 * the dataset. If a `shuffle` source of random numbers uniformly distributed in [0, 1) is
 * provided the rows are shuffled first with a Fisher-Yates shuffle, consuming one random
 * number per row after the first. As all randomness is provided to this function, the
 * split is deterministic given the same random numbers.
 *
 * ```
 * use rand::{Rng, SeedableRng};
 * use rand::distr::StandardUniform;
 * use rand_chacha::ChaCha8Rng;
 * use gaussian_bayes::matrices::Matrix;
 * use gaussian_bayes::preprocessing::train_test_split;
 *
 * let samples = Matrix::column(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
 * let labels = vec!['a', 'b', 'c', 'd', 'e'];
 * let mut random_numbers = ChaCha8Rng::seed_from_u64(5).sample_iter::<f64, _>(StandardUniform);
 * let split = train_test_split(&samples, &labels, 0.4, Some(&mut random_numbers)).unwrap();
 * assert_eq!(split.training_labels.len(), 3);
 * assert_eq!(split.testing_labels.len(), 2);
 * ```
 */
pub fn train_test_split<T, L>(
    samples: &Matrix<T>,
    labels: &[L],
    test_proportion: f64,
    shuffle: Option<&mut dyn Iterator<Item = f64>>,
) -> Result<Split<T, L>, SplitError>
where
    T: Clone,
    L: Clone,
{
    if samples.rows() != labels.len() {
        return Err(SplitError::LabelCountMismatch {
            samples: samples.rows(),
            labels: labels.len(),
        });
    }
    if !(test_proportion > 0.0 && test_proportion < 1.0) {
        return Err(SplitError::InvalidProportion(test_proportion));
    }
    let total = samples.rows();
    let testing = ((total as f64) * test_proportion).floor() as usize;
    let training = total - testing;
    if testing == 0 || training == 0 {
        return Err(SplitError::EmptyPartition { training, testing });
    }

    let mut order: Vec<Row> = (0..total).collect();
    if let Some(random_numbers) = shuffle {
        for i in (1..total).rev() {
            let u = random_numbers
                .next()
                .ok_or(SplitError::RandomNumbersExhausted)?;
            let j = ((u * ((i + 1) as f64)) as usize).min(i);
            order.swap(i, j);
        }
    }
    let (training_rows, testing_rows) = order.split_at(training);
    Ok(Split {
        training_samples: samples.select_rows(training_rows),
        training_labels: training_rows.iter().map(|&row| labels[row].clone()).collect(),
        testing_samples: samples.select_rows(testing_rows),
        testing_labels: testing_rows.iter().map(|&row| labels[row].clone()).collect(),
    })
}

/**
 * An error from splitting a dataset.
 */
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub enum SplitError {
    LabelCountMismatch { samples: Row, labels: usize },
    /** The proportion to test with must be strictly between 0 and 1. */
    InvalidProportion(f64),
    /** The proportion left one of the parts without any rows. */
    EmptyPartition { training: Row, testing: Row },
    RandomNumbersExhausted,
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::LabelCountMismatch { samples, labels } => write!(
                f,
                "Dataset has {} samples but {} labels",
                samples, labels
            ),
            SplitError::InvalidProportion(proportion) => write!(
                f,
                "Test proportion {} is not strictly between 0 and 1",
                proportion
            ),
            SplitError::EmptyPartition { training, testing } => write!(
                f,
                "Split would leave {} training rows and {} testing rows",
                training, testing
            ),
            SplitError::RandomNumbersExhausted => {
                write!(f, "Ran out of random numbers while shuffling")
            }
        }
    }
}

impl Error for SplitError {}

/**
 * Computes the fraction of predictions that are equal to the expected labels.
 *
 * Returns None if there are no labels or the two lists are different lengths.
 */
pub fn accuracy_score<T: Numeric, L: PartialEq>(expected: &[L], predicted: &[L]) -> Option<T> {
    if expected.is_empty() || expected.len() != predicted.len() {
        return None;
    }
    let mut correct = T::zero();
    let mut total = T::zero();
    for (expected, predicted) in expected.iter().zip(predicted) {
        total = total + T::one();
        if expected == predicted {
            correct = correct + T::one();
        }
    }
    Some(correct / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_scales_rows_to_unit_length() {
        let samples = Matrix::from(vec![vec![3.0, 4.0], vec![0.0, 0.0], vec![0.0, -2.0]]);
        let normalized = normalize(&samples);
        assert_eq!(
            normalized,
            Matrix::from(vec![vec![0.6, 0.8], vec![0.0, 0.0], vec![0.0, -1.0]])
        );
    }

    #[test]
    fn unshuffled_split_takes_testing_rows_from_the_end() {
        let samples = Matrix::column(vec![1.0, 2.0, 3.0, 4.0]);
        let labels = [10, 20, 30, 40];
        let split = train_test_split(&samples, &labels, 0.5, None).unwrap();
        assert_eq!(split.training_samples, Matrix::column(vec![1.0, 2.0]));
        assert_eq!(split.training_labels, vec![10, 20]);
        assert_eq!(split.testing_samples, Matrix::column(vec![3.0, 4.0]));
        assert_eq!(split.testing_labels, vec![30, 40]);
    }

    #[test]
    fn shuffled_split_keeps_rows_and_labels_together() {
        let samples = Matrix::column(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let labels = [1, 2, 3, 4, 5, 6];
        let mut random_numbers = vec![0.0, 0.0, 0.0, 0.0, 0.0].into_iter();
        let split = train_test_split(&samples, &labels, 0.5, Some(&mut random_numbers)).unwrap();
        // always swapping with the first row rotates the order to 2, 3, 4, 5, 6, 1
        assert_eq!(split.training_labels, vec![2, 3, 4]);
        assert_eq!(split.testing_labels, vec![5, 6, 1]);
        for (row, label) in split.training_labels.iter().enumerate() {
            assert_eq!(split.training_samples.get(row, 0), *label as f64);
        }
    }

    #[test]
    fn split_rejects_bad_input() {
        let samples = Matrix::column(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            train_test_split(&samples, &[1, 2], 0.5, None),
            Err(SplitError::LabelCountMismatch {
                samples: 3,
                labels: 2
            })
        );
        assert_eq!(
            train_test_split(&samples, &[1, 2, 3], 1.0, None),
            Err(SplitError::InvalidProportion(1.0))
        );
        assert_eq!(
            train_test_split(&samples, &[1, 2, 3], 0.2, None),
            Err(SplitError::EmptyPartition {
                training: 3,
                testing: 0
            })
        );
        let mut random_numbers = vec![0.5].into_iter();
        assert_eq!(
            train_test_split(&samples, &[1, 2, 3], 0.5, Some(&mut random_numbers)),
            Err(SplitError::RandomNumbersExhausted)
        );
    }

    #[test]
    fn accuracy_is_fraction_correct() {
        assert_eq!(accuracy_score::<f64, _>(&[1, 2, 3, 4], &[1, 2, 0, 4]), Some(0.75));
        assert_eq!(accuracy_score::<f64, char>(&[], &[]), None);
        assert_eq!(accuracy_score::<f64, _>(&[1], &[1, 2]), None);
    }
}

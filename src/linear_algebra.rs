/*!
 * Summary statistics the classifier estimates its Gaussians with.
 */

use crate::numeric::Numeric;

/**
 * Computes the mean of the values in an iterator, consuming the iterator.
 *
 * This function does not perform any numerical stabilisation.
 *
 * # Panics
 *
 * If the iterator is empty.
 */
pub fn mean<I, T: Numeric>(data: I) -> T
where
    I: Iterator<Item = T>,
{
    let mut count = T::zero();
    let mut sum = T::zero();
    let mut seen_any = false;
    for value in data {
        seen_any = true;
        count = count + T::one();
        sum = sum + value;
    }
    assert!(seen_any, "Provided iterator must not be empty");
    sum / count
}

/**
 * Computes the variance of the values in an iterator, consuming the iterator.
 *
 * Variance is defined as expected value of of the squares of the zero mean data.
 * It captures how much data varies from its mean, ie the spread of the data.
 *
 * This is the population variance, it does not perform
 * [Bessel's correction](https://en.wikipedia.org/wiki/Bessel%27s_correction), so the
 * sum of squared differences is divided by the number of values rather than one less.
 *
 * The two pass definition is used rather than the mean of the squares minus the square
 * of the mean, as the latter suffers from catastrophic cancellation in floating point.
 * Identical values therefore always have a variance of exactly 0.
 *
 * # Panics
 *
 * If the iterator is empty.
 */
pub fn variance<I, T: Numeric>(data: I) -> T
where
    I: Iterator<Item = T>,
{
    let list = data.collect::<Vec<T>>();
    assert!(!list.is_empty(), "Provided iterator must not be empty");
    let m = mean(list.iter().cloned());
    mean(
        list.into_iter()
            .map(|x| (x.clone() - m.clone()) * (x - m.clone())),
    )
}

/*!
Models of distributions that samples can be drawn from.

These structs and methods require numerical types that can be treated as real numbers, ie
unsigned and signed integers cannot be used here.

# Example of drawing from a Gaussian

All randomness is supplied by the caller as an iterator of uniformly distributed numbers,
for example using a fixed seed random generator from the rand crate.

```
use rand::{Rng, SeedableRng};
use rand::distr::StandardUniform;
use rand_chacha::ChaCha8Rng;
use gaussian_bayes::distributions::Gaussian;

let heights = Gaussian::new(1.5, 0.25 * 0.25);

let mut random_generator = ChaCha8Rng::seed_from_u64(10);
let mut random_numbers = (&mut random_generator).sample_iter::<f64, _>(StandardUniform);

// unwrap is perfectly safe if and only if we know we have supplied enough random numbers
let samples: Vec<f64> = heights.draw(&mut random_numbers, 1000).unwrap();
assert_eq!(samples.len(), 1000);

let estimate = Gaussian::approximating(samples.into_iter());
assert!((estimate.mean - 1.5).abs() < 0.05);
```
 */

use crate::linear_algebra;
use crate::numeric::extra::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/**
 * A Gaussian probability density function of a normally distributed
 * random variable with expected value / mean μ, and variance σ<sup>2</sup>.
 *
 * See: [https://en.wikipedia.org/wiki/Gaussian_function](https://en.wikipedia.org/wiki/Gaussian_function)
 */
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gaussian<T> {
    /**
     * The mean is the expected value of this gaussian.
     */
    pub mean: T,
    /**
     * The variance is a measure of the spread of values around the mean, high variance means
     * one standard deviation encompasses a larger spread of values from the mean.
     */
    pub variance: T,
}

impl<T: Real> Gaussian<T> {
    pub fn new(mean: T, variance: T) -> Gaussian<T> {
        Gaussian { mean, variance }
    }

    /**
     * Creates a Gaussian with the mean and population variance of the provided data.
     *
     * If you generate some data according to some mean and variance then construct a
     * Gaussian from that data the approximated mean and variance is unlikely to be exactly
     * the same as the parameters the data was generated with, though it will get closer
     * as the amount of data increases.
     *
     * # Panics
     *
     * If the iterator is empty.
     */
    pub fn approximating<I>(data: I) -> Gaussian<T>
    where
        I: Iterator<Item = T>,
    {
        let copy: Vec<T> = data.collect();
        Gaussian {
            mean: linear_algebra::mean(copy.iter().cloned()),
            variance: linear_algebra::variance(copy.into_iter()),
        }
    }

    /**
     * Computes g(x) for some x, the probability density of a normally
     * distributed random variable x, or in other words how likely x is
     * to be drawn from this normal distribution.
     *
     * g(x) = (1 / sqrt(2πσ<sup>2</sup>)) * e^(-(x - μ)<sup>2</sup> / 2σ<sup>2</sup>)
     *
     * g(x) is largest for x equal to this distribution's mean and
     * g(x) will tend towards zero as x is further from this distribution's
     * mean, at a rate corresponding to this distribution's variance.
     *
     * No special handling is done for a variance of 0, the division by zero yields
     * infinities and NaNs as IEEE floating point arithmetic defines.
     */
    pub fn probability(&self, x: &T) -> T {
        let two = T::one() + T::one();
        let two_pi = two.clone() * T::pi();
        let fraction = T::one() / (two_pi * self.variance.clone()).sqrt();
        let difference = x.clone() - self.mean.clone();
        let exponent = -(difference.clone() * difference) / (two * self.variance.clone());
        fraction * exponent.exp()
    }

    /**
     * Given a source of random variables in the uniformly distributed
     * range [0, 1] inclusive, draws `max_samples` of independent
     * random numbers according to this Gaussian distribution's mean and
     * variance using the Box-Muller transform:
     *
     * [https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform](https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform)
     *
     * The source of random variables must provide at least as many values
     * as `max_samples` if `max_samples` is even, and one more than `max_samples`
     * if `max_samples` is odd. If fewer are provided None is returned.
     *
     * As all randomness is provided to this method, this code is deterministic
     * and will always compute the same samples given the same random source
     * of numbers.
     */
    pub fn draw<I>(&self, source: &mut I, max_samples: usize) -> Option<Vec<T>>
    where
        I: Iterator<Item = T>,
    {
        let two = T::one() + T::one();
        let minus_two = -two.clone();
        let two_pi = two * T::pi();
        let standard_deviation = self.variance.clone().sqrt();
        let mut samples = Vec::with_capacity(max_samples + 1);
        while samples.len() < max_samples {
            let (u, v) = (source.next()?, source.next()?);
            // converts two uniform samples to two samples of a normal
            // distribution with μ = 0 and σ = 1
            let radius = (minus_two.clone() * u.ln()).sqrt();
            let angle = two_pi.clone() * v;
            let z1 = radius.clone() * angle.clone().cos();
            let z2 = radius * angle.sin();
            samples.push((z1 * standard_deviation.clone()) + self.mean.clone());
            samples.push((z2 * standard_deviation.clone()) + self.mean.clone());
        }
        samples.truncate(max_samples);
        Some(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_peaks_at_the_mean() {
        let gaussian: Gaussian<f64> = Gaussian::new(2.0, 0.5);
        let peak = gaussian.probability(&2.0);
        let expected = 1.0 / (2.0 * std::f64::consts::PI * 0.5).sqrt();
        assert!((peak - expected).abs() < 1e-12);
        assert!(gaussian.probability(&2.5) < peak);
        assert_eq!(gaussian.probability(&1.5), gaussian.probability(&2.5));
    }

    #[test]
    fn density_uses_the_squared_distance_over_twice_the_variance() {
        let gaussian: Gaussian<f64> = Gaussian::new(0.0, 4.0);
        let expected = (1.0 / (2.0 * std::f64::consts::PI * 4.0).sqrt()) * (-9.0_f64 / 8.0).exp();
        assert!((gaussian.probability(&3.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_variance_density_is_not_finite() {
        let gaussian: Gaussian<f64> = Gaussian::new(1.0, 0.0);
        assert!(gaussian.probability(&1.0).is_nan());
        assert!(gaussian.probability(&2.0).is_nan());
    }

    #[test]
    fn approximating_uses_population_variance() {
        let gaussian: Gaussian<f64> = Gaussian::approximating(vec![1.0, 2.0, 3.0].into_iter());
        assert_eq!(gaussian.mean, 2.0);
        assert!((gaussian.variance - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn draw_needs_enough_random_numbers() {
        let gaussian = Gaussian::new(0.0, 1.0);
        let mut source = vec![0.5, 0.5, 0.5].into_iter();
        assert_eq!(gaussian.draw(&mut source, 4), None);
        let mut source = vec![0.5, 0.5, 0.5].into_iter();
        assert_eq!(gaussian.draw(&mut source, 1).map(|samples| samples.len()), Some(1));
    }
}

/*!
 * A Gaussian Naïve Bayes classifier over real valued feature matrices.
 *
 * If this is your first time using this crate you should start with the
 * [naive_bayes](./naive_bayes/index.html) module, which fits a classifier to a
 * [Matrix](./matrices/struct.Matrix.html) of samples and predicts classes for new ones.
 *
 * # Modules
 * - [Naïve Bayes](./naive_bayes/index.html) classifier
 * - [Preprocessing](./preprocessing/index.html) for normalising, splitting and scoring
 * - [Distributions](./distributions/index.html) for the Gaussian the classifier is built on
 *
 * # Logging
 *
 * Fitting and classifying emit records through the [log](https://docs.rs/log) facade.
 * No logger is installed by this crate.
 *
 * # Features
 * - `serde`: derives `Serialize` and `Deserialize` for [Matrix](matrices::Matrix) and
 *   [Gaussian](distributions::Gaussian)
 */

pub mod distributions;
pub mod linear_algebra;
pub mod matrices;
pub mod numeric;

pub mod naive_bayes;
pub mod preprocessing;

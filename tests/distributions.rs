extern crate gaussian_bayes;

#[cfg(test)]
mod tests {
    use gaussian_bayes::distributions::Gaussian;

    use rand::distr::StandardUniform;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_normal_distribution() {
        let function: Gaussian<f64> = Gaussian::new(-2.0, 0.25);

        let mut random_generator = ChaCha8Rng::seed_from_u64(11);
        let mut random_numbers = (&mut random_generator).sample_iter::<f64, _>(StandardUniform);
        let samples = function.draw(&mut random_numbers, 2000).unwrap();
        assert_eq!(samples.len(), 2000);

        // Box-Muller draws should recover both parameters, the standard error of
        // the mean here is around 0.01
        let estimate: Gaussian<f64> = Gaussian::approximating(samples.into_iter());
        assert!((estimate.mean - function.mean).abs() < 0.05);
        assert!((estimate.variance - function.variance).abs() < 0.05);
    }

    #[test]
    fn test_drawing_is_deterministic() {
        let function = Gaussian::new(-3.0, 0.5);
        let source = vec![0.1, 0.7, 0.3, 0.9, 0.5, 0.2];
        let first = function.draw(&mut source.clone().into_iter(), 5);
        let second = function.draw(&mut source.into_iter(), 5);
        assert_eq!(first, second);
        assert_eq!(first.map(|samples| samples.len()), Some(5));
    }
}

//! A three class acceptance test on generated data, normalised, split, fitted and scored.

extern crate gaussian_bayes;

#[cfg(test)]
mod tests {
    use gaussian_bayes::distributions::Gaussian;
    use gaussian_bayes::matrices::Matrix;
    use gaussian_bayes::naive_bayes::{GaussianNaiveBayes, NaiveBayesError};
    use gaussian_bayes::preprocessing::{accuracy_score, normalize, train_test_split};

    use rand::distr::StandardUniform;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    enum Flower {
        Wide,
        Tall,
        Round,
    }

    const SAMPLES_PER_CLASS: usize = 100;

    /**
     * Generates two features per sample, each drawn from a unit variance Gaussian around
     * the class centre.
     */
    fn generate(
        centre: (f64, f64),
        random_numbers: &mut impl Iterator<Item = f64>,
    ) -> Vec<Vec<f64>> {
        let x = Gaussian::new(centre.0, 1.0)
            .draw(random_numbers, SAMPLES_PER_CLASS)
            .unwrap();
        let y = Gaussian::new(centre.1, 1.0)
            .draw(random_numbers, SAMPLES_PER_CLASS)
            .unwrap();
        x.into_iter().zip(y).map(|(x, y)| vec![x, y]).collect()
    }

    fn dataset(seed: u64) -> (Matrix<f64>, Vec<Flower>) {
        let mut random_generator = ChaCha8Rng::seed_from_u64(seed);
        let mut random_numbers = (&mut random_generator).sample_iter::<f64, _>(StandardUniform);
        let mut rows = Vec::with_capacity(3 * SAMPLES_PER_CLASS);
        let mut labels = Vec::with_capacity(3 * SAMPLES_PER_CLASS);
        for (centre, flower) in [
            ((10.0, 1.0), Flower::Wide),
            ((1.0, 10.0), Flower::Tall),
            ((7.0, 7.0), Flower::Round),
        ] {
            rows.extend(generate(centre, &mut random_numbers));
            labels.extend(std::iter::repeat(flower).take(SAMPLES_PER_CLASS));
        }
        (Matrix::from(rows), labels)
    }

    #[test]
    fn three_class_accuracy() {
        let (samples, labels) = dataset(16);
        let samples = normalize(&samples);

        let mut random_generator = ChaCha8Rng::seed_from_u64(4);
        let mut random_numbers = (&mut random_generator).sample_iter::<f64, _>(StandardUniform);
        let split = train_test_split(&samples, &labels, 0.5, Some(&mut random_numbers)).unwrap();
        assert_eq!(split.testing_samples.rows(), 150);

        let model = GaussianNaiveBayes::default()
            .fit(&split.training_samples, &split.training_labels)
            .unwrap();
        assert_eq!(model.classes(), &[Flower::Wide, Flower::Tall, Flower::Round]);

        let predictions = model.predict(&split.testing_samples).unwrap();
        assert_eq!(predictions.len(), split.testing_labels.len());
        let accuracy: f64 = accuracy_score(&split.testing_labels, &predictions).unwrap();
        println!("Accuracy: {:?}", accuracy);
        assert!(accuracy > 0.9);

        let priors: f64 = model
            .classes()
            .iter()
            .map(|class| model.prior(class).unwrap())
            .sum();
        assert!((priors - 1.0).abs() < 1e-12);
    }

    #[test]
    fn predictions_are_repeatable() {
        let (samples, labels) = dataset(7);
        let settings = GaussianNaiveBayes::default();
        let first = settings.fit(&samples, &labels).unwrap();
        let second = settings.fit(&samples, &labels).unwrap();
        assert_eq!(first.predict(&samples), second.predict(&samples));
        assert_eq!(first.predict(&samples), first.predict(&samples));
    }

    #[test]
    fn models_can_be_shared_between_threads() {
        let (samples, labels) = dataset(3);
        let model = GaussianNaiveBayes::default().fit(&samples, &labels).unwrap();
        let expected = model.predict(&samples).unwrap();
        let halves = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..2)
                .map(|half| {
                    let model = &model;
                    let samples = &samples;
                    scope.spawn(move || {
                        let start = half * samples.rows() / 2;
                        let end = (half + 1) * samples.rows() / 2;
                        (start..end)
                            .map(|row| model.classify(samples.row_slice(row)).unwrap())
                            .collect::<Vec<Flower>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect::<Vec<Flower>>()
        });
        assert_eq!(halves, expected);
    }

    #[test]
    fn errors_explain_themselves() {
        let (samples, labels) = dataset(1);
        let model = GaussianNaiveBayes::default().fit(&samples, &labels).unwrap();
        let error = model.classify(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(error, NaiveBayesError::ShapeMismatch { expected: 2, actual: 3 });
        assert_eq!(
            error.to_string(),
            "Sample has 3 features but the model was fitted with 2"
        );
    }
}

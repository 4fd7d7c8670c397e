use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Runs `algorithm` over every pixel of a `width` x `height` grid.
///
/// Results are row-major, top row first. Single-threaded and blocking.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = (i32, i32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x, pixel.y))
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_visits_every_pixel_in_row_major_order() {
        let results = generate_fractal(3, 2, &StubSuccessAlgorithm {}).unwrap();

        assert_eq!(
            results,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_single_pixel_grid() {
        let results = generate_fractal(1, 1, &StubSuccessAlgorithm {}).unwrap();

        assert_eq!(results, vec![(0, 0)]);
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let result = generate_fractal(2, 2, &StubFailureAlgorithm {});

        assert_eq!(result, Err(StubError {}));
    }
}

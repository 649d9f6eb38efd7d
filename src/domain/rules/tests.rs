// Unit tests for domain rules

#[cfg(test)]
mod tests {
    use crate::domain::model::*;
    use crate::domain::rules::*;

    #[test]
    fn test_trim_hundred_second_clip() {
        let window = TrimEstimator::default().estimate(100.0);
        assert_eq!(window, TrimWindow::new(5.0, 95.0));
    }

    #[test]
    fn test_trim_is_exact_percentage() {
        let estimator = TrimEstimator::default();
        for duration in [0.5, 3.2, 7.77, 42.0, 3600.25] {
            let window = estimator.estimate(duration);
            assert_eq!(window.start, duration * 0.05);
            assert_eq!(window.end, duration * (1.0 - 0.05));
            assert!(window.start < window.end);
        }
    }

    #[test]
    fn test_trim_unknown_duration() {
        let estimator = TrimEstimator::default();
        assert_eq!(estimator.estimate(0.0), TrimWindow::none());
        assert_eq!(estimator.estimate(-3.0), TrimWindow::none());
    }

    #[test]
    fn test_trim_fraction_validation() {
        assert!(TrimEstimator::new(0.1).is_ok());
        assert!(TrimEstimator::new(0.0).is_ok());
        assert!(TrimEstimator::new(0.5).is_err());
        assert!(TrimEstimator::new(-0.01).is_err());
    }

    #[test]
    fn test_thumbnail_after_trim_start() {
        let policy = ThumbnailPolicy::default();
        assert_eq!(policy.timestamp(&TrimWindow::new(5.0, 95.0)), 5.5);
    }

    #[test]
    fn test_thumbnail_default_without_trim() {
        let policy = ThumbnailPolicy::default();
        assert_eq!(policy.timestamp(&TrimWindow::none()), 1.0);
        // An end-only window still uses the default timestamp
        assert_eq!(policy.timestamp(&TrimWindow::new(0.0, 9.0)), 1.0);
    }

    #[test]
    fn test_thumbnail_policy_rejects_negative() {
        assert!(ThumbnailPolicy::new(-0.5, 1.0).is_err());
        assert!(ThumbnailPolicy::new(0.5, -1.0).is_err());
    }
}

use square_common::config::Config;
use square_common::policy::OverflowPolicy;
use square_core::{MAX_SAFE_INPUT, SquareError, Squared, is_safe, square, square_all, square_with};

/// The one scenario the original test suite checked.
#[test]
fn square_returns_correct_value() {
    assert_eq!(square(4), Ok(16));
}

#[test]
fn default_config_reports_overflow() {
    let cfg: Config = Config::default();
    let results: Vec<Squared> = square_all(&[4, MAX_SAFE_INPUT + 1], cfg.overflow);

    assert_eq!(results[0].result, Ok(16));
    assert_eq!(
        results[1].result,
        Err(SquareError::Overflow { input: MAX_SAFE_INPUT + 1 })
    );
}

#[test]
fn policy_parsed_from_text_drives_the_batch() {
    let policy: OverflowPolicy = "saturating".parse().unwrap();
    let cfg: Config = Config { overflow: policy, quiet: 2, no_banner: true };

    let results: Vec<Squared> = square_all(&[-4, i64::MIN], cfg.overflow);
    let values: Vec<i64> = results.iter().map(|s| s.result.unwrap()).collect();
    assert_eq!(values, vec![16, i64::MAX]);
}

#[test]
fn squares_are_never_negative_unless_wrapped() {
    let inputs = [i64::MIN, -MAX_SAFE_INPUT - 1, -3, 0, 3, MAX_SAFE_INPUT + 1, i64::MAX];
    for x in inputs {
        if let Ok(v) = square(x) {
            assert!(v >= 0, "square({x}) = {v}");
        }
        assert!(square_with(x, OverflowPolicy::Saturating).unwrap() >= 0);
    }
}

#[test]
fn safe_inputs_match_plain_multiplication() {
    let mut x: i64 = -MAX_SAFE_INPUT;
    while x <= MAX_SAFE_INPUT {
        assert!(is_safe(x));
        assert_eq!(square(x), Ok(x * x), "input {x}");
        x += 7_919_001;
    }
}

use super::*;
use crate::Error;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$")).unwrap()
}

/// Check every integer in `window` against `[low, high]`.
fn assert_exact(low: u64, high: u64, window: std::ops::RangeInclusive<u64>) {
    let pattern = range_to_pattern(&low.to_string(), &high.to_string()).unwrap();
    let re = compile(&pattern);
    for n in window {
        let expected = low <= n && n <= high;
        assert_eq!(re.is_match(&n.to_string()), expected, "pattern {pattern} for {low}..{high} on {n}");
    }
}

#[test]
fn two_digit_range_is_a_single_branch() {
    assert_eq!(range_to_pattern("10", "99").unwrap(), "[1-9][0-9]");
}

#[test]
fn equal_bounds_render_a_literal() {
    for literal in ["0", "7", "4711", "0099", "123456789012345678901234"] {
        assert_eq!(range_to_pattern(literal, literal).unwrap(), literal);
    }
}

#[test]
fn input_order_does_not_matter() {
    for (a, b) in [("25", "5"), ("2500", "1500"), ("999", "1"), ("0150", "0099")] {
        assert_eq!(range_to_pattern(a, b).unwrap(), range_to_pattern(b, a).unwrap());
    }
}

#[test]
fn known_shapes() {
    let cases = [
        ("5", "25", "([5-9]|1[0-9]|2[0-5])"),
        ("1000", "1999", "1[0-9]{3}"),
        ("1500", "2500", "(1[5-9][0-9]{2}|2[0-4][0-9]{2}|2500)"),
        ("123", "999", "(12[3-9]|1[3-9][0-9]|[2-9][0-9]{2})"),
        ("1", "999", "[1-9][0-9]{0,2}"),
        ("0", "999", "([0-9]|[1-9][0-9]{1,2})"),
        ("0099", "0150", "0(099|1[0-4][0-9]|150)"),
        ("05", "100", "([5-9]|[1-9][0-9]|100)"),
        ("0", "9", "[0-9]"),
        ("20", "21", "2[0-1]"),
    ];
    for (a, b, expected) in cases {
        assert_eq!(range_to_pattern(a, b).unwrap(), expected, "{a}..{b}");
    }
}

#[test]
fn flags_change_grouping_and_anchoring() {
    let flags = PatternFlags::NON_CAPTURING | PatternFlags::ANCHORED;
    assert_eq!(range_to_pattern_with("5", "25", flags).unwrap(), "^(?:[5-9]|1[0-9]|2[0-5])$");
    assert_eq!(range_to_pattern_with("10", "99", PatternFlags::ANCHORED).unwrap(), "^[1-9][0-9]$");
    assert_eq!(range_to_pattern_with("42", "42", PatternFlags::NON_CAPTURING).unwrap(), "42");
}

#[test]
fn invalid_arguments_are_rejected() {
    for (a, b) in [("", "5"), ("5", ""), ("1a", "20"), ("10", "2 0"), ("+1", "9"), ("-3", "3")] {
        assert!(matches!(range_to_pattern(a, b), Err(Error::InvalidArgument(_))), "{a:?}..{b:?}");
    }
}

#[test]
fn brute_force_small_ranges() {
    assert_exact(5, 25, 0..=300);
    assert_exact(0, 0, 0..=100);
    assert_exact(0, 1000, 0..=1200);
    assert_exact(7, 7, 0..=100);
    assert_exact(99, 101, 0..=1200);
    assert_exact(1, 999, 0..=1200);
    assert_exact(10, 1099, 0..=1500);
    assert_exact(187, 1234, 0..=1500);
}

#[test]
fn brute_force_every_pair_below_120() {
    for low in 0..120u64 {
        for high in low..120 {
            assert_exact(low, high, 0..=150);
        }
    }
}

#[test]
fn fixed_width_matches_only_padded_strings() {
    let re = compile(&range_to_pattern("0099", "0150").unwrap());
    for n in 0..=2000u32 {
        let padded = format!("{n:04}");
        assert_eq!(re.is_match(&padded), (99..=150).contains(&n), "{padded}");
    }
    assert!(!re.is_match("99"));
    assert!(!re.is_match("150"));
}

#[test]
fn fragments_cover_the_range_in_order() {
    let fragments = pattern_fragments("187", "1234").unwrap();
    let first = fragments.first().unwrap();
    let last = fragments.last().unwrap();
    assert_eq!(first.low(), "187");
    assert_eq!(last.high(), "1234");

    for pair in fragments.windows(2) {
        let prev_high: u64 = pair[0].high().parse().unwrap();
        let next_low: u64 = pair[1].low().parse().unwrap();
        assert_eq!(prev_high + 1, next_low);
    }
    for fragment in &fragments {
        assert_eq!(fragment.low().len(), fragment.high().len());
        assert!(fragment.classes().all(|(lo, hi)| lo <= hi));
    }
}

#[test]
fn fragments_have_one_class_then_full_positions() {
    for fragment in pattern_fragments("1500", "2500").unwrap() {
        let classes: Vec<_> = fragment.classes().collect();
        let fixed = classes.iter().take_while(|(lo, hi)| lo == hi).count();
        assert!(classes[fixed..].iter().skip(1).all(|&c| c == (0, 9)), "{fragment:?}");
    }
}

proptest! {
    #[test]
    fn pattern_matches_exactly_the_range(
        a in 0u64..20_000,
        b in 0u64..20_000,
        samples in prop::collection::vec(0u64..25_000, 32)
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let pattern = range_to_pattern(&a.to_string(), &b.to_string()).unwrap();
        let re = compile(&pattern);

        let edges = [low.saturating_sub(1), low, high, high + 1];
        for n in edges.into_iter().chain(samples) {
            prop_assert_eq!(re.is_match(&n.to_string()), low <= n && n <= high, "{} on {}", pattern, n);
        }
    }

    #[test]
    fn fixed_width_pattern_matches_padded_range(
        a in 0u32..10_000,
        b in 0u32..10_000,
        samples in prop::collection::vec(0u32..10_000, 32)
    ) {
        let (low, high) = (a.min(b), a.max(b));
        let pattern = range_to_pattern(&format!("{a:04}"), &format!("{b:04}")).unwrap();
        let re = compile(&pattern);

        for n in [low, high].into_iter().chain(samples) {
            prop_assert_eq!(re.is_match(&format!("{n:04}")), low <= n && n <= high, "{} on {:04}", pattern, n);
        }
    }
}

use super::*;

#[test]
fn format_usd_uses_two_decimals() {
    assert_eq!(format_usd(150.0), "$150.00");
    assert_eq!(format_usd(1800.0), "$1800.00");
    assert_eq!(format_usd(12.5), "$12.50");
}

#[test]
fn format_whole_usd_groups_thousands() {
    assert_eq!(format_whole_usd(35_000), "$35,000");
    assert_eq!(format_whole_usd(1_250_000), "$1,250,000");
    assert_eq!(format_whole_usd(999), "$999");
    assert_eq!(format_whole_usd(0), "$0");
}

#[test]
fn group_thousands_handles_exact_multiples() {
    assert_eq!(group_thousands(100_000), "100,000");
    assert_eq!(group_thousands(1000), "1,000");
}

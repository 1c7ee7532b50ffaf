use super::*;

#[test]
fn lookup_by_id() {
    assert_eq!(Locale::by_id("en-US").unwrap().label, "English");
    assert_eq!(Locale::by_id("fi").unwrap().week.starts_on, Weekday::Mon);
    assert!(Locale::by_id("de").is_none());
    assert_eq!(Locale::all().len(), 2);
}

#[test]
fn month_names_are_one_based() {
    assert_eq!(EN_US.month_name(1), "January");
    assert_eq!(EN_US.month_name(12), "December");
    assert_eq!(FI.month_name(7), "heinäkuu");
}

use chrono::{Datelike, NaiveDate};
use dtp_core::plan::PickerPlan;
use dtp_core::visibility::Visibility;
use dtp_core::{MonthOfYear, month_name};

#[test]
fn trigger_gated_picker_toggles_through_full_cycle() {
    let mut state = Visibility::initial(true);
    assert!(!state.is_expanded());

    state = state.toggled();
    assert!(state.is_expanded());

    state = state.toggled();
    assert!(!state.is_expanded());
}

#[test]
fn untriggered_picker_starts_expanded() {
    assert!(Visibility::initial(false).is_expanded());
}

#[test]
fn plan_for_today_names_the_current_month() {
    let today = dtp_core::datetime::today();
    let plan = PickerPlan::compose(today, false);

    assert_eq!(plan.months.len(), 1);
    assert_eq!(plan.months[0].name, month_name(today.month0() as i32));
}

#[test]
fn range_plan_spans_the_year_boundary() {
    let new_years_eve = NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date");
    let plan = PickerPlan::compose(new_years_eve, true);

    let names: Vec<&str> = plan.months.iter().map(|label| label.name).collect();
    assert_eq!(names, vec!["December", "January"]);

    let january = plan.months[1].month;
    assert_eq!(january, MonthOfYear { year: 2026, month0: 0 });
}

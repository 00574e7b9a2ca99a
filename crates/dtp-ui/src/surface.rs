use chrono::NaiveDate;
use dtp_core::PickerPlan;
use dtp_core::datetime;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PickerSurfaceProps {
    #[prop_or_default]
    pub reference_date: Option<NaiveDate>,
    #[prop_or_default]
    pub has_range: bool,
}

#[function_component(PickerSurface)]
pub fn picker_surface(props: &PickerSurfaceProps) -> Html {
    // The reference date is captured once per render pass.
    let reference = props.reference_date.unwrap_or_else(datetime::today);
    let plan = PickerPlan::compose(reference, props.has_range);

    html! {
        <div class="dtp">
            {
                for plan.months.iter().map(|label| html! {
                    <span class="dtp-month">{ label.name }</span>
                })
            }
        </div>
    }
}

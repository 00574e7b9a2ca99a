use chrono::NaiveDate;
use dtp_core::Visibility;
use yew::{Html, Properties, function_component, html, use_state};

use crate::surface::PickerSurface;

#[derive(Properties, PartialEq)]
pub struct DateTimePickerProps {
    #[prop_or_default]
    pub trigger: Option<Html>,
    #[prop_or_default]
    pub has_range: bool,
    #[prop_or_default]
    pub reference_date: Option<NaiveDate>,
}

#[function_component(DateTimePicker)]
pub fn date_time_picker(props: &DateTimePickerProps) -> Html {
    let visibility = use_state(|| Visibility::initial(props.trigger.is_some()));

    html! {
        <>
            {
                if let Some(trigger) = &props.trigger {
                    let visibility = visibility.clone();
                    let onclick = move |_: yew::MouseEvent| {
                        let next = visibility.toggled();
                        tracing::debug!(expanded = next.is_expanded(), "picker trigger clicked");
                        visibility.set(next);
                    };
                    html! {
                        <div class="dtp-trigger" {onclick}>
                            { trigger.clone() }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if visibility.is_expanded() {
                    html! {
                        <PickerSurface
                            reference_date={props.reference_date}
                            has_range={props.has_range}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

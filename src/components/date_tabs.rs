use yew::prelude::*;
use crate::utils::format_date_tab;

#[derive(Properties, PartialEq, Clone)]
pub struct DateTabsProps {
    pub dates: Vec<String>,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
}

#[function_component(DateTabs)]
pub fn date_tabs(props: &DateTabsProps) -> Html {
    html! {
        <div class="date-tabs" role="tablist">
            { for props.dates.iter().map(|date| {
                let is_active = props.selected.as_deref() == Some(date.as_str());
                let onclick = {
                    let cb = props.on_select.clone();
                    let date = date.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(date.clone()))
                };
                html! {
                    <button
                        key={date.clone()}
                        class={classes!("date-tab", is_active.then_some("active"))}
                        role="tab"
                        aria-selected={is_active.to_string()}
                        {onclick}
                    >
                        { format_date_tab(date) }
                    </button>
                }
            }) }
        </div>
    }
}

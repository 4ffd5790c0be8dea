use yew::prelude::*;
use crate::errors::LocationError;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationNoticeProps {
    pub error: LocationError,
    pub on_retry: Callback<()>,
}

/// Error de ubicación con botón de reintento
#[function_component(LocationNotice)]
pub fn location_notice(props: &LocationNoticeProps) -> Html {
    let onclick = {
        let cb = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="location-notice">
            <p class="error">{ format!("Geolocation error: {}", props.error.user_message()) }</p>
            <button class="retry-button" {onclick}>{"Retry"}</button>
        </div>
    }
}

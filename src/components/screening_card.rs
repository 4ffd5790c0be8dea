use yew::prelude::*;
use crate::models::Screening;
use crate::utils::{format_seats, format_time_range};

#[derive(Properties, PartialEq, Clone)]
pub struct ScreeningCardProps {
    pub screening: Screening,
}

#[function_component(ScreeningCard)]
pub fn screening_card(props: &ScreeningCardProps) -> Html {
    let s = &props.screening;
    let booking_url = s.booking_url().map(str::to_string);

    // Solo clicable si hay URL de reserva
    let onclick = booking_url.clone().map(|url| {
        Callback::from(move |_: MouseEvent| open_booking(&url))
    });

    let card_classes = classes!(
        "screening-card",
        booking_url.is_some().then_some("bookable"),
    );

    html! {
        <div class={card_classes} {onclick}>
            <div class="screening-time">{ format_time_range(s) }</div>
            <div class="screening-screen">{ &s.screen_name }</div>
            <div class="screening-seats">{ format_seats(s) }</div>
        </div>
    }
}

fn open_booking(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener") {
        log::error!("❌ No se pudo abrir la reserva: {:?}", e);
    }
}

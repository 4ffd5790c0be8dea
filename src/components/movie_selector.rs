use web_sys::HtmlSelectElement;
use yew::prelude::*;
use crate::hooks::use_movies;

#[derive(Properties, PartialEq, Clone)]
pub struct MovieSelectorProps {
    pub selected: Option<i64>,
    pub on_select: Callback<Option<i64>>,
}

#[function_component(MovieSelector)]
pub fn movie_selector(props: &MovieSelectorProps) -> Html {
    let movies = use_movies();

    let onchange = {
        let cb = props.on_select.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            cb.emit(parse_movie_id(&value));
        })
    };

    let poster = props
        .selected
        .and_then(|id| movies.items.iter().find(|m| m.id == id))
        .and_then(|m| m.poster_url.clone().map(|url| (url, m.title.clone())));

    html! {
        <div class="movie-selector">
            <select {onchange} disabled={movies.loading}>
                <option value="" selected={props.selected.is_none()}>{"— Select a movie —"}</option>
                { for movies.items.iter().map(|m| html! {
                    <option
                        key={m.id.to_string()}
                        value={m.id.to_string()}
                        selected={props.selected == Some(m.id)}
                    >
                        { &m.title }
                    </option>
                }) }
            </select>
            if movies.loading {
                <span class="loading">{"Loading…"}</span>
            }
            if let Some(error) = &movies.error {
                <p class="error">{ error }</p>
            }
            if let Some((url, title)) = poster {
                <img class="movie-poster" src={url} alt={title} />
            }
        </div>
    }
}

/// Valor del `<select>` → id de película. El placeholder vacío es "sin selección"
pub fn parse_movie_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_means_no_selection() {
        assert_eq!(parse_movie_id(""), None);
        assert_eq!(parse_movie_id("abc"), None);
        assert_eq!(parse_movie_id("42"), Some(42));
    }
}

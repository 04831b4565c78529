use rideshare_lib::{controller::review::StarPicker, view::format::Star};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarRowProps {
    pub stars: [Star; 5],
}

#[function_component]
pub fn StarRow(props: &StarRowProps) -> Html {
    html! {
        <span class="stars">
            { for props.stars.iter().map(|star| html! { <i class={star.css_class()}></i> }) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StarInputProps {
    pub picker: UseStateHandle<StarPicker>,
}

/// Clickable five-star input with a hover preview.
#[function_component]
pub fn StarInput(props: &StarInputProps) -> Html {
    let picker = props.picker.clone();
    let update = move |change: fn(&mut StarPicker, u8), star: u8| {
        let picker = picker.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *picker;
            change(&mut next, star);
            picker.set(next);
        })
    };

    let onmouseleave = update(|p, _| p.leave(), 0);

    html! {
        <div class="star-picker mb-3">
            <div {onmouseleave}>
                { for props.picker.stars().iter().zip(1u8..).map(|(star, n)| html! {
                    <i
                        class={star.css_class()}
                        onmouseenter={update(StarPicker::hover, n)}
                        onclick={update(StarPicker::select, n)}
                    ></i>
                }) }
            </div>
            <small class="text-muted">{ props.picker.label() }</small>
        </div>
    }
}

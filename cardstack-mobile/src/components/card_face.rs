//! One card of the stack: artwork, label, and description

use yew::prelude::*;

use cardstack_core::{CardMetrics, CardPose};

#[derive(Properties, PartialEq)]
pub struct CardFaceProps {
    pub label: AttrValue,
    pub description: AttrValue,
    pub pose: CardPose,
    pub metrics: CardMetrics,
    /// Physical card carries its label above the artwork, virtual below.
    #[prop_or(false)]
    pub label_above: bool,
}

#[function_component(CardFace)]
pub fn card_face(props: &CardFaceProps) -> Html {
    let container_style = format!("transform: translateY({}px);", props.pose.translate_y);
    let card_style = format!(
        "width: {}px; height: {}px;",
        props.metrics.width, props.metrics.height
    );
    let label_style = format!("opacity: {};", props.pose.label_opacity);
    let description_style = format!(
        "transform: translateY({}px); opacity: {};",
        props.pose.description_translate_y, props.pose.description_opacity
    );

    let label_class = if props.label_above {
        "card-label label-above"
    } else {
        "card-label label-below"
    };

    html! {
        <div class="card-container" style={container_style}>
            <img
                src="assets/credit_card.svg"
                class="card"
                style={card_style}
                alt={props.label.clone()}
            />
            <span class={label_class} style={label_style}>{&props.label}</span>
            <p class="card-description" style={description_style}>{&props.description}</p>
        </div>
    }
}

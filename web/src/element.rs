use recallo_core as game;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ElementProps {
    pub id: game::ElementId,
    pub element: game::Element,
    pub metrics: game::ElementMetrics,
    /// Rendered in document flow instead of at its absolute position.
    #[prop_or_default]
    pub settled: bool,
    pub onclick: Callback<game::ElementId>,
}

/// Inline style projecting an element's state onto its button.
pub(crate) fn element_style(
    element: &game::Element,
    metrics: game::ElementMetrics,
    settled: bool,
) -> String {
    let game::ElementMetrics {
        width,
        height,
        margin,
    } = metrics;
    let color = element.color();
    let mut style =
        format!("background-color: {color}; width: {width}px; height: {height}px; margin: {margin}px;");
    if !settled {
        let game::Position { top, left } = element.position();
        style.push_str(&format!(" top: {top}px; left: {left}px;"));
    }
    style
}

#[function_component(ElementView)]
pub(crate) fn element_component(props: &ElementProps) -> Html {
    let ElementProps {
        id,
        element,
        metrics,
        settled,
        onclick,
    } = props.clone();

    let style = element_style(&element, metrics, settled);
    let class = classes!(
        "element",
        if settled { "settled" } else { "placed" },
        element.is_clickable().then_some("clickable"),
    );
    let label = element
        .label()
        .map(|order| order.to_string())
        .unwrap_or_default();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{} clicked", id);
        onclick.emit(id);
    });

    html! {
        <button {class} {style} {onclick}>{label}</button>
    }
}

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct MenuProps {
    pub prompt: AttrValue,
    pub go: AttrValue,
    pub input: NodeRef,
    pub onsubmit: Callback<()>,
}

/// Entry prompt asking how many buttons the next round gets.
#[function_component(MenuView)]
pub(crate) fn menu_component(props: &MenuProps) -> Html {
    let MenuProps {
        prompt,
        go,
        input,
        onsubmit,
    } = props.clone();

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        onsubmit.emit(());
    });

    html! {
        <form id="form" {onsubmit}>
            <h1>{prompt}</h1>
            <input ref={input} type="text" id="n" min="3" max="7" autofocus={true}/>
            <input type="submit" value={go}/>
        </form>
    }
}

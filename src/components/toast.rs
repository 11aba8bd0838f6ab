use yew::prelude::*;

use crate::hooks::{Toast, ToastHandle, ToastList};

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Owns the toast queue and renders it above the page
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let handle = use_memo((), {
        let dispatcher = list.dispatcher();
        move |_| ToastHandle::new(dispatcher)
    });

    html! {
        <ContextProvider<ToastHandle> context={(*handle).clone()}>
            { props.children.clone() }
            <Toaster toasts={list.toasts.clone()} handle={(*handle).clone()} />
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToasterProps {
    toasts: Vec<Toast>,
    handle: ToastHandle,
}

#[function_component(Toaster)]
fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster">
            { for props.toasts.iter().map(|toast| {
                let on_close = {
                    let handle = props.handle.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| handle.dismiss(id))
                };
                html! {
                    <div key={toast.id} class={classes!("toast", toast.kind.class())}>
                        <span class="toast-message">{ &toast.message }</span>
                        <button class="btn-close" onclick={on_close}>{"✕"}</button>
                    </div>
                }
            }) }
        </div>
    }
}

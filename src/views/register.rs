use yew::prelude::*;

use crate::components::AuthForm;
use crate::hooks::AuthMode;

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    html! { <AuthForm mode={AuthMode::Register} /> }
}

use yew::prelude::*;

use crate::components::AuthForm;
use crate::hooks::AuthMode;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    html! { <AuthForm mode={AuthMode::Login} /> }
}

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_auth, AuthMode};
use crate::router::Route;
use crate::utils::validation::{validate_credentials, validate_registration, FormErrors};

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub mode: AuthMode,
}

/// Login and register share one form; register adds the confirmation field
#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let errors = use_state(FormErrors::default);
    let auth = use_auth(props.mode);
    let mode = props.mode;

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let errors = errors.clone();
        let submit = auth.submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let username = input_value(&username_ref);
            let password = input_value(&password_ref);
            let checked = match mode {
                AuthMode::Login => validate_credentials(&username, &password),
                AuthMode::Register => {
                    validate_registration(&username, &password, &input_value(&confirm_ref))
                }
            };

            match checked {
                Ok(()) => {
                    errors.set(FormErrors::new());
                    submit.emit((username, password));
                }
                Err(field_errors) => errors.set(field_errors),
            }
        })
    };

    let field_error = |field: &str| match errors.get(field) {
        Some(message) => html! { <span class="field-error">{ message.to_string() }</span> },
        None => html! {},
    };

    let (title, button_text) = match mode {
        AuthMode::Login => ("Sign in", "Login"),
        AuthMode::Register => ("Create account", "Register"),
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"📦"}</div>
                    </div>
                    <h1>{"Product Console"}</h1>
                    <p>{ title }</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder="Enter your username"
                            autocomplete="username"
                            ref={username_ref}
                        />
                        { field_error("username") }
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            ref={password_ref}
                        />
                        { field_error("password") }
                    </div>

                    {
                        if mode == AuthMode::Register {
                            html! {
                                <div class="form-group">
                                    <label for="confirm-password">{"Confirm Password"}</label>
                                    <input
                                        type="password"
                                        id="confirm-password"
                                        name="confirm_password"
                                        placeholder="Repeat your password"
                                        ref={confirm_ref}
                                    />
                                    { field_error("confirm_password") }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <button type="submit" class="btn-login" disabled={auth.submitting}>
                        <span class="btn-text">
                            { if auth.submitting { "Please wait..." } else { button_text } }
                        </span>
                    </button>

                    <div class="login-footer">
                        {
                            match mode {
                                AuthMode::Login => html! {
                                    <p class="register-text">
                                        {"No account yet? "}
                                        <Link<Route> to={Route::Register} classes={classes!("btn-register-link")}>{"Register"}</Link<Route>>
                                    </p>
                                },
                                AuthMode::Register => html! {
                                    <p class="register-text">
                                        {"Already registered? "}
                                        <Link<Route> to={Route::Login} classes={classes!("btn-register-link")}>{"Login"}</Link<Route>>
                                    </p>
                                },
                            }
                        }
                    </div>
                </form>
            </div>
        </div>
    }
}

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::Status;
use crate::providers::api;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Activity names offered in the select box
    pub activities: Vec<String>,
    /// Callback fired with the outcome of every submission
    pub on_status: Callback<Status>,
    /// Callback fired after a successful signup so the list can be reloaded
    pub on_signed_up: Callback<()>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let api = use_memo((), |_| api::create());

    let email = use_state(String::new);
    let activity = use_state(String::new);
    let loading = use_state(|| false);

    let is_valid = !email.is_empty() && !activity.is_empty();

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_activity_change = {
        let activity = activity.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                activity.set(select.value());
            }
        })
    };

    // The default must be prevented synchronously, before the request is spawned.
    let on_submit = {
        let api = api.clone();
        let email = email.clone();
        let activity = activity.clone();
        let loading = loading.clone();
        let on_status = props.on_status.clone();
        let on_signed_up = props.on_signed_up.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading || email.is_empty() || activity.is_empty() {
                return;
            }

            let api = api.clone();
            let email = email.clone();
            let activity = activity.clone();
            let loading = loading.clone();
            let on_status = on_status.clone();
            let on_signed_up = on_signed_up.clone();

            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api.signup(&activity, &email).await {
                    Ok(response) => {
                        on_status.emit(Status::success(response.message));
                        email.set(String::new());
                        activity.set(String::new());
                        on_signed_up.emit(());
                    }
                    Err(err) => on_status.emit(Status::error(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <form id="signup-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="email">{ "Student Email:" }</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
            </div>
            <div class="form-group">
                <label for="activity">{ "Select Activity:" }</label>
                <select id="activity" required=true onchange={on_activity_change}>
                    <option value="" selected={activity.is_empty()}>
                        { "-- Select an activity --" }
                    </option>
                    {
                        for props.activities.iter().map(|name| html! {
                            <option
                                key={name.clone()}
                                value={name.clone()}
                                selected={*activity == *name}
                            >
                                { name }
                            </option>
                        })
                    }
                </select>
            </div>
            <button type="submit" disabled={!is_valid || *loading}>
                { if *loading { "Signing up..." } else { "Sign Up" } }
            </button>
        </form>
    }
}

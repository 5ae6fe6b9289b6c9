mod components;
mod providers;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use components::{ActivityCard, SignupForm, Status, StatusBanner};
use mergington::{async_callback, data::ActivityDirectory, log};
use providers::api;

/// How long a status message stays visible, in milliseconds.
const STATUS_TIMEOUT_MS: u32 = 5_000;

#[function_component(App)]
fn app() -> Html {
    let api = use_memo((), |_| api::create());
    let directory = use_state(|| None::<ActivityDirectory>);
    let load_error = use_state(|| None::<String>);
    let status = use_state(|| None::<Status>);
    let status_timeout: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let refresh = async_callback!([api, directory, load_error] {
        match api.list_activities().await {
            Ok(activities) => {
                log::debug!("Loaded {} activities", activities.len());
                directory.set(Some(activities));
                load_error.set(None);
            }
            Err(err) => {
                log::error!("Failed to load activities: {err}");
                load_error.set(Some(format!("Failed to load activities: {err}")));
            }
        }
    });

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| refresh.emit(()));
    }

    // Replacing the stored timeout cancels the previous one.
    let show_status = {
        let status = status.clone();
        Callback::from(move |next: Status| {
            status.set(Some(next));
            let status = status.clone();
            *status_timeout.borrow_mut() =
                Some(Timeout::new(STATUS_TIMEOUT_MS, move || status.set(None)));
        })
    };

    let on_unregister = async_callback!([api, refresh, show_status] |request: (String, String)| {
        let (activity, email) = request;
        match api.unregister(&activity, &email).await {
            Ok(response) => {
                show_status.emit(Status::success(response.message));
                refresh.emit(());
            }
            Err(err) => show_status.emit(Status::error(err.to_string())),
        }
    });

    let activity_names: Vec<String> = directory
        .as_ref()
        .map(|directory| directory.keys().cloned().collect())
        .unwrap_or_default();

    let activities = match (directory.as_ref(), load_error.as_ref()) {
        (_, Some(error)) => html! { <p class="error">{ error }</p> },
        (None, None) => html! { <p>{ "Loading activities..." }</p> },
        (Some(directory), None) => directory
            .iter()
            .map(|(name, activity)| {
                html! {
                    <ActivityCard
                        key={name.clone()}
                        name={name.clone()}
                        activity={activity.clone()}
                        on_unregister={on_unregister.clone()}
                    />
                }
            })
            .collect::<Html>(),
    };

    html! {
        <>
            <header>
                <h1>{ "Mergington High School" }</h1>
                <h2>{ "Extracurricular Activities" }</h2>
            </header>

            <main>
                <section id="activities-container">
                    <h3>{ "Available Activities" }</h3>
                    { activities }
                </section>

                <section id="signup-container">
                    <h3>{ "Sign Up for an Activity" }</h3>
                    <SignupForm
                        activities={activity_names}
                        on_status={show_status}
                        on_signed_up={refresh}
                    />
                    <StatusBanner status={(*status).clone()} />
                </section>
            </main>

            <footer>
                <p>{ "© 2026 Mergington High School" }</p>
            </footer>
        </>
    }
}

fn main() {
    mergington::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;

use mergington::data::Activity;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: String,
    pub activity: Activity,
    /// Fired with `(activity, email)` when a participant's delete button is clicked
    pub on_unregister: Callback<(String, String)>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let ActivityCardProps {
        name,
        activity,
        on_unregister,
    } = props;

    let participant = |email: &String| {
        let onclick = {
            let on_unregister = on_unregister.clone();
            let name = name.clone();
            let email = email.clone();
            Callback::from(move |_: MouseEvent| {
                on_unregister.emit((name.clone(), email.clone()));
            })
        };

        html! {
            <li key={email.clone()}>
                <span class="participant-email">{ email }</span>
                <button class="delete-btn" title="Unregister" {onclick}>{ "✖" }</button>
            </li>
        }
    };

    html! {
        <div class="activity-card">
            <h4>{ name }</h4>
            <p>{ &activity.description }</p>
            <p><strong>{ "Schedule: " }</strong>{ &activity.schedule }</p>
            <p>
                <strong>{ "Availability: " }</strong>
                { format!("{} spots left", activity.spots_left()) }
            </p>
            <div class="participants-section">
                <h5>{ "Participants" }</h5>
                if activity.participants.is_empty() {
                    <p class="no-participants">{ "No participants yet" }</p>
                } else {
                    <ul class="participants-list">
                        { for activity.participants.iter().map(participant) }
                    </ul>
                }
            </div>
        </div>
    }
}

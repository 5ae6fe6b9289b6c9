use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Outcome of the last signup or unregister, shown under the form.
#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    #[prop_or_default]
    pub status: Option<Status>,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let Some(status) = &props.status else {
        return html! {};
    };

    let class = match status.kind {
        StatusKind::Success => "message success",
        StatusKind::Error => "message error",
    };

    html! {
        <div id="message" {class}>{ &status.text }</div>
    }
}

#[macro_export]
/// Build a yew `Callback` that runs an async block.
///
/// Every listed variable is cloned into the callback and again into the
/// spawned future, so handles such as `UseStateHandle` can be used freely
/// inside the body.
///
/// Without an event parameter:
/// ```compile_fail
/// let refresh = async_callback!([api, activities] {
///     if let Ok(directory) = api.list_activities().await {
///         activities.set(directory);
///     }
/// });
/// ```
///
/// With an event parameter:
/// ```compile_fail
/// let on_submit = async_callback!([api, email, activity] |event: SubmitEvent| {
///     event.prevent_default();
///     let _ = api.signup(&activity, &email).await;
/// });
/// ```
macro_rules! async_callback {
    // The event arm comes first: a closure body would also match `$body:expr`.
    ([$($var:ident),* $(,)?] |$event:ident $(: $ty:ty)?| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event $(: $ty)?| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}

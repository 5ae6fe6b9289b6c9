use mergington::api::{ApiClient, ApiError, HttpApiClient};
use mergington::data::{ActivityDirectory, MessageResponse};

/// Client for the activities backend, providing one method per endpoint.
pub struct Api {
    client: HttpApiClient,
}

impl Api {
    pub fn new(base_url: &str) -> Self {
        Api {
            client: HttpApiClient::new(base_url).with_header("accept", "application/json"),
        }
    }

    pub async fn list_activities(&self) -> Result<ActivityDirectory, ApiError> {
        self.client.get("/activities").await
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError> {
        self.client
            .post_query(&activity_endpoint(activity, "signup"), &[("email", email)])
            .await
    }

    pub async fn unregister(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .post_query(&activity_endpoint(activity, "unregister"), &[("email", email)])
            .await
    }
}

// Activity names contain spaces, so the path segment is encoded.
fn activity_endpoint(activity: &str, action: &str) -> String {
    let encoded = String::from(js_sys::encode_uri_component(activity));
    format!("/activities/{encoded}/{action}")
}

/// Create a client for the backend that served this page.
pub fn create() -> Api {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    Api::new(&origin)
}

#[cfg(test)]
pub mod test_utils {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Multipart, State};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::post;
    use axum::{Json, Router};
    use tokio::net::TcpListener;

    /// How the mock prediction endpoint answers
    #[derive(Clone)]
    pub enum Reply {
        Json(StatusCode, serde_json::Value),
        Text(StatusCode, &'static str),
    }

    #[derive(Clone)]
    pub struct MockService {
        reply: Reply,
        received: Arc<Mutex<Vec<Vec<(String, String)>>>>,
    }

    impl MockService {
        /// Multipart fields of every request received so far
        pub fn received(&self) -> Vec<Vec<(String, String)>> {
            self.received.lock().unwrap().clone()
        }
    }

    async fn predict(State(state): State<MockService>, mut multipart: Multipart) -> Response {
        let mut fields = Vec::new();
        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().unwrap_or_default().to_string();
            let value = field.text().await.unwrap_or_default();
            fields.push((name, value));
        }
        state.received.lock().unwrap().push(fields);

        match state.reply {
            Reply::Json(status, body) => (status, Json(body)).into_response(),
            Reply::Text(status, body) => (status, body).into_response(),
        }
    }

    /// Start a prediction endpoint on an ephemeral port.
    /// Returns the `/predict` URL and a handle to inspect requests.
    pub async fn spawn_mock_service(reply: Reply) -> (String, MockService) {
        let state = MockService {
            reply,
            received: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/predict", post(predict))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock service");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/predict", addr), state)
    }

    /// URL of a port nothing listens on
    pub async fn closed_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/predict", addr)
    }

    /// `1,2,...,60`
    pub fn sequential_series() -> String {
        (1..=60).map(|i| i.to_string()).collect::<Vec<_>>().join(",")
    }
}

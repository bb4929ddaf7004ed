#[cfg(test)]
mod integration_tests {
    use std::cell::RefCell;

    use axum::http::StatusCode;
    use common::{
        ChartRenderer, CycleOutcome, ForecastChart, ModelKind, Notice, Notifier,
        PredictionController, PredictionRequest, PredictionResponse, PredictionService,
        ServiceError, SubmitState,
    };
    use serde_json::json;

    use crate::client::HttpPredictionService;
    use crate::config::ClientConfig;
    use crate::render::{HtmlChartRenderer, summary};
    use crate::terminal::{TerminalControl, TerminalInput, join_lines};
    use crate::test_utils::test_utils::{
        Reply, closed_endpoint, sequential_series, spawn_mock_service,
    };

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<Notice>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: &Notice) {
            self.0.borrow_mut().push(notice.clone());
        }
    }

    fn lstm_request() -> PredictionRequest {
        PredictionRequest::new(sequential_series().parse().unwrap(), ModelKind::Lstm)
    }

    #[tokio::test]
    async fn test_service_posts_multipart_fields() {
        let (endpoint, mock) = spawn_mock_service(Reply::Json(
            StatusCode::OK,
            json!({ "predictions": [61.2, 62.5] }),
        ))
        .await;
        let service = HttpPredictionService::new(endpoint).unwrap();

        let response = service.predict(&lstm_request()).await.unwrap();

        assert_eq!(
            response,
            PredictionResponse::Predictions { predictions: vec![61.2, 62.5] }
        );
        let received = mock.received();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0],
            vec![
                ("data".to_string(), sequential_series()),
                ("model".to_string(), "lstm".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_error_body_decoded_despite_status() {
        let (endpoint, _mock) = spawn_mock_service(Reply::Json(
            StatusCode::BAD_REQUEST,
            json!({ "error": "Please enter at least 60 past prices." }),
        ))
        .await;
        let service = HttpPredictionService::new(endpoint).unwrap();

        let response = service.predict(&lstm_request()).await.unwrap();

        assert_eq!(
            response,
            PredictionResponse::Error { error: "Please enter at least 60 past prices.".to_string() }
        );
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let (endpoint, _mock) = spawn_mock_service(Reply::Text(
            StatusCode::BAD_GATEWAY,
            "<html>Bad Gateway</html>",
        ))
        .await;
        let service = HttpPredictionService::new(endpoint).unwrap();

        let err = service.predict(&lstm_request()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let service = HttpPredictionService::new(closed_endpoint().await).unwrap();

        let err = service.predict(&lstm_request()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_full_cycle_writes_chart() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("forecast.html");
        let (endpoint, _mock) = spawn_mock_service(Reply::Json(
            StatusCode::OK,
            json!({ "predictions": [61.2, 62.5] }),
        ))
        .await;

        let service = HttpPredictionService::new(endpoint).unwrap();
        let mut controller = PredictionController::new(HtmlChartRenderer::new(&output));
        let mut control = TerminalControl::default();
        let notifier = RecordingNotifier::default();
        let input = TerminalInput::new(sequential_series(), ModelKind::Lstm);

        let outcome = controller.submit(&input, &mut control, &service, &notifier).await;

        assert_eq!(outcome, CycleOutcome::Rendered { points: 2 });
        assert_eq!(control.state(), SubmitState::Ready);
        assert!(notifier.0.borrow().is_empty());

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("Predicted Price (lstm)"));
        assert!(html.contains("Day 2"));

        let chart = controller.renderer().last_chart().unwrap();
        assert_eq!(chart.values(), &[61.2, 62.5]);
    }

    #[tokio::test]
    async fn test_invalid_series_never_reaches_service() {
        let dir = tempfile::tempdir().unwrap();
        let (endpoint, mock) = spawn_mock_service(Reply::Json(
            StatusCode::OK,
            json!({ "predictions": [1.0] }),
        ))
        .await;

        let service = HttpPredictionService::new(endpoint).unwrap();
        let mut controller =
            PredictionController::new(HtmlChartRenderer::new(dir.path().join("chart.html")));
        let mut control = TerminalControl::default();
        let notifier = RecordingNotifier::default();
        let input = TerminalInput::new("1,2,abc", ModelKind::Gru);

        let outcome = controller.submit(&input, &mut control, &service, &notifier).await;

        assert!(matches!(outcome, CycleOutcome::Rejected(_)));
        assert!(mock.received().is_empty());
        assert_eq!(*notifier.0.borrow(), vec![Notice::Validation]);
        assert_eq!(control.state(), SubmitState::Ready);
        assert!(!dir.path().join("chart.html").exists());
    }

    #[tokio::test]
    async fn test_service_error_keeps_previous_chart() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("forecast.html");
        let (ok_endpoint, _ok) = spawn_mock_service(Reply::Json(
            StatusCode::OK,
            json!({ "predictions": [10.0, 11.0, 12.0] }),
        ))
        .await;
        let (err_endpoint, _err) = spawn_mock_service(Reply::Json(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "Model \"rnn\" is not available or failed to load." }),
        ))
        .await;

        let mut controller = PredictionController::new(HtmlChartRenderer::new(&output));
        let notifier = RecordingNotifier::default();
        let input = TerminalInput::new(sequential_series(), ModelKind::Rnn);

        let ok = HttpPredictionService::new(ok_endpoint).unwrap();
        controller
            .submit(&input, TerminalControl::default(), &ok, &notifier)
            .await;
        let before = std::fs::read_to_string(&output).unwrap();

        let failing = HttpPredictionService::new(err_endpoint).unwrap();
        let outcome = controller
            .submit(&input, TerminalControl::default(), &failing, &notifier)
            .await;

        assert!(matches!(outcome, CycleOutcome::ServiceError(_)));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), before);
        assert_eq!(
            *notifier.0.borrow(),
            vec![Notice::Service(
                "Model \"rnn\" is not available or failed to load.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_transport_failure_notifies_generic_message() {
        let dir = tempfile::tempdir().unwrap();
        let service = HttpPredictionService::new(closed_endpoint().await).unwrap();
        let mut controller =
            PredictionController::new(HtmlChartRenderer::new(dir.path().join("chart.html")));
        let mut control = TerminalControl::default();
        let notifier = RecordingNotifier::default();
        let input = TerminalInput::new(sequential_series(), ModelKind::Lstm);

        let outcome = controller.submit(&input, &mut control, &service, &notifier).await;

        assert!(matches!(outcome, CycleOutcome::Failed(_)));
        assert_eq!(
            notifier.0.borrow()[0].message(),
            "An error occurred while fetching predictions."
        );
        assert_eq!(control.state(), SubmitState::Ready);
    }

    #[test]
    fn test_renderer_destroy_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = HtmlChartRenderer::new(dir.path().join("chart.html"));

        let handle = renderer
            .render(&ForecastChart::new(ModelKind::Gru, vec![1.0, 2.0]))
            .unwrap();
        assert!(handle.exists());
        assert!(renderer.last_chart().is_some());

        renderer.destroy(handle.clone());
        assert!(!handle.exists());
        assert!(renderer.last_chart().is_none());

        // Destroying twice is harmless
        renderer.destroy(handle);
    }

    #[test]
    fn test_summary_lists_every_day() {
        let text = summary(&ForecastChart::new(ModelKind::Lstm, vec![61.2, 62.5]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Predicted Price (lstm)");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Day 1") && lines[1].contains("61.20"));
        assert!(lines[2].contains("Day 2") && lines[2].contains("62.50"));
    }

    #[test]
    fn test_join_lines_accepts_one_value_per_line() {
        let contents = "1\n2\n\n  3  \r\n";
        assert_eq!(join_lines(contents), "1,2,3");

        let csv = format!("{}\n", sequential_series());
        assert_eq!(join_lines(&csv), sequential_series());
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::load(None).unwrap();
        assert_eq!(config.endpoint, common::DEFAULT_ENDPOINT);
        assert_eq!(config.model, ModelKind::Lstm);
        assert_eq!(config.output, std::path::PathBuf::from("prediction.html"));
    }

    #[test]
    fn test_config_file_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockcast.toml");
        std::fs::write(
            &path,
            "endpoint = \"http://localhost:5000/predict\"\nmodel = \"gru\"\n",
        )
        .unwrap();

        let config = ClientConfig::load(Some(&path)).unwrap();
        assert_eq!(config.endpoint, "http://localhost:5000/predict");
        assert_eq!(config.model, ModelKind::Gru);

        let config = config
            .with_overrides(None, Some(ModelKind::Rnn), Some("out.html".into()))
            .unwrap();
        assert_eq!(config.model, ModelKind::Rnn);
        assert_eq!(config.endpoint, "http://localhost:5000/predict");
    }

    #[test]
    fn test_config_rejects_invalid_endpoint() {
        let config = ClientConfig::load(None).unwrap();
        assert!(config
            .with_overrides(Some("not a url".to_string()), None, None)
            .is_err());
    }

    #[test]
    fn test_config_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ClientConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;
    use weather_lookup::models::{
        error::AppError,
        lookup::{LookupAction, LookupState, Phase},
        weather::WeatherResult,
    };
    use weather_lookup::services::{lookup::submit, wttr_api::WeatherSource};
    use yew::prelude::Reducible;

    // Stub source that records every city it is asked for
    struct StubSource {
        calls: RefCell<Vec<String>>,
        outcome: Result<WeatherResult, AppError>,
    }

    impl StubSource {
        fn returning(outcome: Result<WeatherResult, AppError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                outcome,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl WeatherSource for StubSource {
        async fn current_conditions(&self, city: &str) -> Result<WeatherResult, AppError> {
            self.calls.borrow_mut().push(city.to_string());
            self.outcome.clone()
        }
    }

    // Applies dispatched actions and keeps every intermediate state
    struct Recorder {
        state: RefCell<Rc<LookupState>>,
        history: RefCell<Vec<Rc<LookupState>>>,
    }

    impl Recorder {
        fn with_query(query: &str) -> Self {
            let recorder = Self {
                state: RefCell::new(Rc::new(LookupState::default())),
                history: RefCell::new(Vec::new()),
            };
            recorder.dispatch(LookupAction::Input(query.to_string()));
            recorder
        }

        fn dispatch(&self, action: LookupAction) {
            let current = Rc::clone(&self.state.borrow());
            let next = current.reduce(action);
            self.history.borrow_mut().push(Rc::clone(&next));
            *self.state.borrow_mut() = next;
        }

        fn current(&self) -> Rc<LookupState> {
            Rc::clone(&self.state.borrow())
        }

        fn history(&self) -> Vec<Rc<LookupState>> {
            self.history.borrow().clone()
        }
    }

    // Source that snapshots the widget state while its request is in flight
    struct ObservingSource {
        recorder: Rc<Recorder>,
        in_flight: RefCell<Option<Rc<LookupState>>>,
        outcome: Result<WeatherResult, AppError>,
    }

    #[async_trait(?Send)]
    impl WeatherSource for ObservingSource {
        async fn current_conditions(&self, _city: &str) -> Result<WeatherResult, AppError> {
            *self.in_flight.borrow_mut() = Some(self.recorder.current());
            self.outcome.clone()
        }
    }

    async fn run_submit(source: &StubSource, query: &str) -> Recorder {
        let recorder = Recorder::with_query(query);
        submit(source, query, 1, |action| recorder.dispatch(action)).await;
        recorder
    }

    fn partly_cloudy() -> WeatherResult {
        WeatherResult::new("18", "60", "Partly cloudy")
    }

    // ===== Validation =====

    #[tokio::test]
    async fn test_empty_query_never_fetches() {
        let source = StubSource::returning(Ok(partly_cloudy()));

        let recorder = run_submit(&source, "").await;
        let state = recorder.current();

        assert_eq!(source.call_count(), 0);
        assert_eq!(state.error_message(), Some("Please enter a city name"));
        assert!(!state.loading);
        assert!(state.result.is_none());
        assert_eq!(state.phase(), Phase::Invalid);
    }

    #[tokio::test]
    async fn test_whitespace_query_never_fetches() {
        let source = StubSource::returning(Ok(partly_cloudy()));

        for query in [" ", "   ", "\t", "\n \t"] {
            let recorder = run_submit(&source, query).await;
            assert_eq!(
                recorder.current().error_message(),
                Some("Please enter a city name")
            );
            assert!(recorder.history().iter().all(|state| !state.loading));
        }

        assert_eq!(source.call_count(), 0);
    }

    // ===== Successful lookup =====

    #[tokio::test]
    async fn test_london_lookup() {
        let source = StubSource::returning(Ok(partly_cloudy()));

        let recorder = run_submit(&source, "London").await;
        let state = recorder.current();

        assert_eq!(*source.calls.borrow(), vec!["London".to_string()]);
        assert_eq!(state.result, Some(partly_cloudy()));
        assert!(state.error_message().is_none());
        assert!(!state.loading);
        assert_eq!(state.report(), Some(("London", &partly_cloudy())));
        assert_eq!(state.phase(), Phase::Succeeded);
    }

    #[tokio::test]
    async fn test_query_reaches_source_verbatim() {
        let source = StubSource::returning(Ok(partly_cloudy()));

        run_submit(&source, " new york ").await;

        assert_eq!(*source.calls.borrow(), vec![" new york ".to_string()]);
    }

    #[tokio::test]
    async fn test_loading_spans_the_request() {
        let source = StubSource::returning(Ok(partly_cloudy()));

        let recorder = run_submit(&source, "London").await;
        let history = recorder.history();

        // Input, Started, Resolved
        assert_eq!(history.len(), 3);
        assert!(!history[0].loading);
        assert!(history[1].loading);
        assert!(history[1].result.is_none());
        assert!(history[1].error.is_none());
        assert!(!history[2].loading);
    }

    #[tokio::test]
    async fn test_loading_holds_while_request_in_flight() {
        let outcomes = [
            Ok(partly_cloudy()),
            Err(AppError::Status(404)),
            Err(AppError::Network("offline".to_string())),
        ];

        for outcome in outcomes {
            let recorder = Rc::new(Recorder::with_query("London"));
            let source = ObservingSource {
                recorder: Rc::clone(&recorder),
                in_flight: RefCell::new(None),
                outcome,
            };

            submit(&source, "London", 1, |action| recorder.dispatch(action)).await;

            let in_flight = source.in_flight.borrow().clone().unwrap();
            assert!(in_flight.loading);
            assert!(in_flight.result.is_none());
            assert!(in_flight.error.is_none());
            assert_eq!(in_flight.phase(), Phase::Fetching);

            assert!(!recorder.current().loading);
        }
    }

    #[tokio::test]
    async fn test_heading_echoes_current_input() {
        let source = StubSource::returning(Ok(partly_cloudy()));

        let recorder = run_submit(&source, "London").await;
        recorder.dispatch(LookupAction::Input("Par".to_string()));

        let state = recorder.current();
        assert_eq!(state.report(), Some(("Par", &partly_cloudy())));
        assert_eq!(*source.calls.borrow(), vec!["London".to_string()]);
    }

    #[tokio::test]
    async fn test_loading_spans_failed_request() {
        let source = StubSource::returning(Err(AppError::Network("offline".to_string())));

        let recorder = run_submit(&source, "London").await;
        let history = recorder.history();

        assert!(history[1].loading);
        assert!(!history[2].loading);
    }

    // ===== Failed lookups =====

    #[tokio::test]
    async fn test_not_found_status() {
        let source = StubSource::returning(Err(AppError::Status(404)));

        let recorder = run_submit(&source, "Atlantis").await;
        let state = recorder.current();

        assert_eq!(source.call_count(), 1);
        assert_eq!(state.error_message(), Some("Could not fetch weather"));
        assert!(state.result.is_none());
        assert!(!state.loading);
        assert_eq!(state.phase(), Phase::Failed);
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let source = StubSource::returning(Err(AppError::Status(503)));

        let state = run_submit(&source, "London").await.current();

        assert_eq!(state.error_message(), Some("Could not fetch weather"));
        assert!(state.result.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let source = StubSource::returning(Err(AppError::Network(
            "connection refused".to_string(),
        )));

        let state = run_submit(&source, "London").await.current();

        assert_eq!(state.error_message(), Some("Network error"));
        assert!(state.result.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_shape_failure() {
        let source = StubSource::returning(Err(AppError::DataError(
            "current_condition is empty".to_string(),
        )));

        let state = run_submit(&source, "London").await.current();

        assert_eq!(state.error_message(), Some("Network error"));
        assert!(state.result.is_none());
    }

    #[tokio::test]
    async fn test_new_submit_replaces_previous_result() {
        let first = StubSource::returning(Ok(partly_cloudy()));
        let second = StubSource::returning(Err(AppError::Status(404)));

        let recorder = Recorder::with_query("London");
        submit(&first, "London", 1, |action| recorder.dispatch(action)).await;
        recorder.dispatch(LookupAction::Input("Atlantis".to_string()));
        submit(&second, "Atlantis", 2, |action| recorder.dispatch(action)).await;

        let state = recorder.current();
        assert!(state.result.is_none());
        assert_eq!(state.error_message(), Some("Could not fetch weather"));
        assert_eq!(state.latest_ticket(), 2);
    }

    // ===== State Tests =====

    #[test]
    fn test_state_equality() {
        let state1 = LookupState::default();
        let state2 = LookupState::default();
        assert_eq!(state1, state2);

        let started = Rc::new(LookupState::default()).reduce(LookupAction::Started {
            ticket: 1,
            city: "London".to_string(),
        });
        assert_ne!(*started, state1);
    }

    #[test]
    fn test_error_message_mapping() {
        let rejected = Rc::new(LookupState::default())
            .reduce(LookupAction::Rejected(AppError::EmptyQuery));
        assert_eq!(rejected.error_message(), Some("Please enter a city name"));
        assert!(rejected.report().is_none());
    }
}

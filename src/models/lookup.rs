use super::error::AppError;
use super::weather::WeatherResult;
use std::rc::Rc;
use yew::prelude::*;

/// Tagged view over the lookup fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Last submit was rejected before any request went out
    Invalid,
    Fetching,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LookupAction {
    /// The input text changed
    Input(String),
    /// Submit failed validation; no request was issued
    Rejected(AppError),
    /// A request for `city` is about to be sent
    Started { ticket: u64, city: String },
    /// The request identified by `ticket` finished
    Resolved {
        ticket: u64,
        outcome: Result<WeatherResult, AppError>,
    },
}

/// State owned by the lookup widget for its whole lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookupState {
    pub query: String,
    pub result: Option<WeatherResult>,
    pub error: Option<AppError>,
    pub loading: bool,
    latest_ticket: u64,
}

impl LookupState {
    pub fn phase(&self) -> Phase {
        match (&self.error, &self.result) {
            _ if self.loading => Phase::Fetching,
            (Some(AppError::EmptyQuery), _) => Phase::Invalid,
            (_, Some(_)) => Phase::Succeeded,
            (Some(_), None) => Phase::Failed,
            (None, None) => Phase::Idle,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(AppError::user_message)
    }

    /// The heading and conditions for the result block. The heading echoes
    /// the current input text, so it follows edits made after the lookup.
    pub fn report(&self) -> Option<(&str, &WeatherResult)> {
        self.result
            .as_ref()
            .map(|result| (self.query.as_str(), result))
    }

    pub fn latest_ticket(&self) -> u64 {
        self.latest_ticket
    }
}

impl Reducible for LookupState {
    type Action = LookupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // A response to anything but the newest request is dropped
        if matches!(&action, LookupAction::Resolved { ticket, .. } if *ticket != self.latest_ticket) {
            return self;
        }

        let mut next = (*self).clone();
        match action {
            LookupAction::Input(query) => next.query = query,
            LookupAction::Rejected(error) => next.error = Some(error),
            LookupAction::Started { ticket, .. } => {
                next.error = None;
                next.result = None;
                next.loading = true;
                next.latest_ticket = ticket;
            }
            LookupAction::Resolved { outcome, .. } => {
                next.loading = false;
                match outcome {
                    Ok(result) => {
                        next.result = Some(result);
                        next.error = None;
                    }
                    Err(error) => {
                        next.result = None;
                        next.error = Some(error);
                    }
                }
            }
        }

        Rc::new(next)
    }
}

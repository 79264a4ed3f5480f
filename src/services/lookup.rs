use crate::models::{error::AppError, lookup::LookupAction};
use crate::services::wttr_api::WeatherSource;
use std::cell::RefCell;

/// Hands out the next request ticket. Tickets start at 1 and strictly
/// increase, which is what lets the reducer drop superseded responses.
pub fn next_ticket(counter: &RefCell<u64>) -> u64 {
    let mut last = counter.borrow_mut();
    *last += 1;
    *last
}

/// Accepts any query with a non-whitespace character and hands it back
/// untouched.
pub fn validate_query(query: &str) -> Result<&str, AppError> {
    if query.trim().is_empty() {
        Err(AppError::EmptyQuery)
    } else {
        Ok(query)
    }
}

/// Runs one submit of the lookup widget.
///
/// A blank query dispatches `Rejected` and never reaches `source`. Otherwise
/// `Started` is dispatched before the single call to `source`, and
/// `Resolved` once it returns. Every state change goes through `dispatch`.
pub async fn submit<S, F>(source: &S, query: &str, ticket: u64, dispatch: F)
where
    S: WeatherSource + ?Sized,
    F: Fn(LookupAction),
{
    let city = match validate_query(query) {
        Ok(city) => city,
        Err(e) => {
            dispatch(LookupAction::Rejected(e));
            return;
        }
    };

    dispatch(LookupAction::Started {
        ticket,
        city: city.to_string(),
    });

    let outcome = source.current_conditions(city).await;

    dispatch(LookupAction::Resolved { ticket, outcome });
}

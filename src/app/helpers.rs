//! Async helpers for delayed messages and the simulated vehicle search

use std::time::Duration;

use iced::Task;

use crate::app::Message;
use crate::features::VehicleQuery;

/// How long the simulated vehicle search takes
pub const VEHICLE_SEARCH_DELAY: Duration = Duration::from_millis(1500);

/// Pretend to look up parts for `query`.
///
/// There is no backend; the query is logged and handed back after a delay
/// so the form can show its loading state.
pub async fn simulate_vehicle_search(query: VehicleQuery) -> anyhow::Result<VehicleQuery> {
    tracing::info!("Vehicle search submitted: {:?}", query);
    tokio::time::sleep(VEHICLE_SEARCH_DELAY).await;

    if query.make.is_empty() && query.vin.trim().is_empty() {
        anyhow::bail!("search needs a make or a VIN");
    }
    Ok(query)
}

/// Emit `message` after `delay`
pub fn delayed(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
        },
        move |_| message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_search_returns_query() {
        let query = VehicleQuery {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: "2022".to_string(),
            ..VehicleQuery::default()
        };
        let found = simulate_vehicle_search(query.clone()).await.unwrap();
        assert_eq!(found, query);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_without_vehicle_fails() {
        assert!(simulate_vehicle_search(VehicleQuery::default()).await.is_err());
    }
}

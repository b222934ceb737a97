//! GET /api/space-fact

use axum::Json;

use fizzbit_core::facts::random_fact;
use fizzbit_types::api::SpaceFact;

pub async fn space_fact() -> Json<SpaceFact> {
    let fact = random_fact(&mut rand::thread_rng());
    Json(SpaceFact::new(fact))
}

//! GraphQL endpoint handlers.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};

use crate::state::AppState;

/// Executes a GraphQL request against the schema.
pub async fn graphql_handler(
    State(state): State<Arc<AppState>>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

/// Serves the GraphiQL IDE pointed at `/`.
pub async fn graphiql_handler() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

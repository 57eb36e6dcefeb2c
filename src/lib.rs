/*!

# graphql_tutorial_server

This repository serves a [Juniper][Juniper] [GraphQL][GraphQL] schema over HTTP with [axum][axum].
All data comes from a small tutorial fixture built once at startup and never written to.

## Endpoints

* `/graphql` executes the `query` field of a JSON body for any method and always answers `200`,
  failures are reported in the `errors` list of the response body
* `GET /graphiql` serves GraphiQL
* `GET /playground` serves GraphQL Playground

## Example

```no_run
use graphql_tutorial_server::{context::Database, serve, types::query::schema, GraphQLHandler};

# async fn run() -> Result<(), graphql_tutorial_server::Error> {
let handler = GraphQLHandler::new(schema(), Database::populate());
serve(graphql_tutorial_server::default_addr(), handler).await
# }
```

## License

This project is under the MIT license.

[Juniper]: https://github.com/graphql-rust/juniper
[GraphQL]: http://graphql.org
[axum]: https://github.com/tokio-rs/axum

*/

extern crate serde_derive;

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::State,
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use failure::Fail;
use http::{header, status::StatusCode};
use juniper::{http as juniper_http, DefaultScalarValue, ScalarValue};
use juniper_http::GraphQLRequest as GqlR;
use log::{debug, error, info};
use tokio::net::TcpListener;

use crate::context::Database;
use crate::types::query::Schema;

pub mod context;
pub mod types;

/// Path the GraphQL endpoint is mounted on
pub const GRAPHQL_PATH: &str = "/graphql";

/// Port the server listens on when nothing else is given
pub const DEFAULT_PORT: u16 = 8080;

/// `0.0.0.0:8080`
pub fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
}

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Failed to bind {}", _0)]
    Bind(SocketAddr, #[cause] io::Error),
    #[fail(display = "Server stopped unexpectedly")]
    Serve(#[cause] io::Error),
    #[fail(display = "Failed to serialize response")]
    Serialize(#[cause] serde_json::Error),
}

/// Body of a request as a plain JSON object. Only a string `query` is read.
///
/// Repeated keys keep the last value.
#[derive(serde_derive::Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(transparent)]
struct PostGraphQLRequest {
    fields: HashMap<String, serde_json::Value>,
}

impl PostGraphQLRequest {
    /// Undecodable bodies yield an empty query, which the executor then rejects.
    fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    fn query(&self) -> &str {
        match self.fields.get("query") {
            Some(serde_json::Value::String(query)) => query.as_str(),
            _ => "",
        }
    }
}

impl<S> From<PostGraphQLRequest> for GqlR<S>
where
    S: ScalarValue,
{
    fn from(post_req: PostGraphQLRequest) -> Self {
        Self::new(post_req.query().to_owned(), None, None)
    }
}

fn response<B: Into<Body>>(status_code: StatusCode, content_type: &'static str, body: B) -> Response {
    (
        status_code,
        [(header::CONTENT_TYPE, content_type)],
        body.into(),
    )
        .into_response()
}

fn html(body: String) -> Response {
    response(StatusCode::OK, "text/html", body)
}

fn json<B: Into<Body>>(status_code: StatusCode, body: B) -> Response {
    response(status_code, "application/json", body)
}

/// Constructs a custom response outside of the normal execution flow
pub fn custom(status_code: StatusCode, response: serde_json::Value) -> Response {
    json(status_code, response.to_string())
}

/// Generate an HTML page containing GraphiQL
pub fn graphiql_source(graphql_endpoint_url: &str) -> Response {
    html(juniper_http::graphiql::graphiql_source(
        graphql_endpoint_url,
        None,
    ))
}

/// Generate an HTML page containing GraphQL Playground
pub fn playground_source(graphql_endpoint_url: &str) -> Response {
    html(juniper_http::playground::playground_source(
        graphql_endpoint_url,
        None,
    ))
}

/// Executes GraphQL queries from request bodies against a fixed schema and context
#[derive(Clone)]
pub struct GraphQLHandler {
    root_node: Arc<Schema>,
    context: Arc<Database>,
}

impl GraphQLHandler {
    pub fn new(root_node: Schema, context: Database) -> Self {
        Self {
            root_node: Arc::new(root_node),
            context: Arc::new(context),
        }
    }

    /// Execute the query carried by a raw request body.
    ///
    /// The status is `200` whether or not the query succeeded.
    pub fn execute(&self, body: &[u8]) -> Response {
        let post_req = PostGraphQLRequest::from_body(body);
        debug!("Executing query: {:?}", post_req.query());
        let gql_req: GqlR<DefaultScalarValue> = post_req.into();
        let gql_res = gql_req.execute_sync(&*self.root_node, &*self.context);
        if !gql_res.is_ok() {
            debug!("Query finished with errors");
        }
        match serde_json::to_vec(&gql_res) {
            Ok(body) => json(StatusCode::OK, body),
            Err(cause) => {
                error!("Failed to serialize response: {}", cause);
                let err = Error::Serialize(cause);
                custom(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "errors": [{ "message": err.to_string() }] }),
                )
            }
        }
    }
}

async fn graphql(State(handler): State<GraphQLHandler>, body: Bytes) -> Response {
    handler.execute(&body)
}

async fn graphiql() -> Response {
    graphiql_source(GRAPHQL_PATH)
}

async fn playground() -> Response {
    playground_source(GRAPHQL_PATH)
}

/// Routes of the server, bound to `handler`
pub fn router(handler: GraphQLHandler) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, any(graphql))
        .route("/graphiql", get(graphiql))
        .route("/playground", get(playground))
        .with_state(handler)
}

/// Bind `addr` and serve `handler` until the server fails
pub async fn serve(addr: SocketAddr, handler: GraphQLHandler) -> Result<(), Error> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| Error::Bind(addr, err))?;
    info!("Listening on http://{}{}", addr, GRAPHQL_PATH);
    axum::serve(listener, router(handler))
        .await
        .map_err(Error::Serve)
}

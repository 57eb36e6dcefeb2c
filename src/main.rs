use std::process;

use failure::Fail;
use graphql_tutorial_server::context::Database;
use graphql_tutorial_server::types::query::schema;
use graphql_tutorial_server::{default_addr, serve, GraphQLHandler};
use log::{error, info};

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    info!("GraphQL Tutorial");

    let root_node = schema();
    let context = Database::populate();
    let handler = GraphQLHandler::new(root_node, context);

    if let Err(err) = serve(default_addr(), handler).await {
        let err: &dyn Fail = &err;
        let causes: Vec<String> = err.iter_chain().map(ToString::to_string).collect();
        error!("{}", causes.join(": "));
        process::exit(1);
    }
}

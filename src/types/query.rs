use crate::context::Database;
use crate::types::Tutorial;
use juniper::{EmptyMutation, EmptySubscription, FieldResult};

pub struct Query;

#[juniper::graphql_object(name = "RootQuery", context = Database)]
impl Query {
    fn hello() -> Option<&'static str> {
        Some("World")
    }

    ///
    /// Get Tutorial By ID
    ///
    fn tutorial(context: &Database, id: Option<i32>) -> FieldResult<Option<Tutorial>> {
        Ok(id.and_then(|id| context.tutorial(id)).map(ToOwned::to_owned))
    }

    ///
    /// Get Full Tutorial List
    ///
    fn list(context: &Database) -> FieldResult<Option<Vec<Option<Tutorial>>>> {
        Ok(Some(context.tutorials().iter().cloned().map(Some).collect()))
    }
}

pub type Schema =
    juniper::RootNode<'static, Query, EmptyMutation<Database>, EmptySubscription<Database>>;

pub fn schema() -> Schema {
    Schema::new(Query, EmptyMutation::new(), EmptySubscription::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use juniper::{graphql_value, Variables};

    fn run(query: &str) -> juniper::Value {
        let (value, errors) =
            juniper::execute_sync(query, None, &schema(), &Variables::new(), &Database::populate())
                .unwrap();
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        value
    }

    #[test]
    fn hello_resolves_to_world() {
        assert_eq!(run("{ hello }"), graphql_value!({ "hello": "World" }));
    }

    #[test]
    fn tutorial_without_id_is_null() {
        assert_eq!(
            run("{ tutorial { id } }"),
            graphql_value!({ "tutorial": null })
        );
    }

    #[test]
    fn tutorial_resolves_comments_in_order() {
        assert_eq!(
            run("{ tutorial(id: 1) { comments { body } } }"),
            graphql_value!({ "tutorial": { "comments": [{ "body": "First Comment" }] } })
        );
    }

    #[test]
    fn root_query_is_named() {
        assert_eq!(
            run("{ __schema { queryType { name } } }"),
            graphql_value!({ "__schema": { "queryType": { "name": "RootQuery" } } })
        );
    }
}

///
/// GraphQL type for a comment left on a tutorial
///
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    /// text of the comment
    pub body: String,
}

impl Comment {
    pub fn new<S: Into<String>>(body: S) -> Self {
        Self { body: body.into() }
    }
}

#[juniper::graphql_object]
impl Comment {
    ///
    /// text of the comment
    ///
    fn body(&self) -> Option<&str> {
        Some(&self.body)
    }
}

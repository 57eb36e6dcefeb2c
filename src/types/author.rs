///
/// GraphQL type for an author
///
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Author {
    /// name of author
    pub name: String,
    /// ids of tutorials written by author, not checked against existing tutorials
    pub tutorials: Vec<i32>,
}

impl Author {
    pub fn new<S: Into<String>>(name: S, tutorials: Vec<i32>) -> Self {
        Self {
            name: name.into(),
            tutorials,
        }
    }
}

#[juniper::graphql_object]
impl Author {
    ///
    /// name of author
    ///
    #[graphql(name = "Name")]
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    ///
    /// ids of tutorials written by author
    ///
    #[graphql(name = "Tutorials")]
    fn tutorials(&self) -> Option<Vec<Option<i32>>> {
        Some(self.tutorials.iter().copied().map(Some).collect())
    }
}

use crate::types::{Author, Comment};

///
/// GraphQL type for a tutorial
///
#[derive(Clone, Debug, PartialEq)]
pub struct Tutorial {
    /// unique identification of tutorial
    pub id: i32,
    /// title of tutorial
    pub title: String,
    /// author of tutorial
    pub author: Author,
    /// comments in order they were posted
    pub comments: Vec<Comment>,
}

#[juniper::graphql_object]
impl Tutorial {
    ///
    /// unique identification of tutorial
    ///
    fn id(&self) -> Option<i32> {
        Some(self.id)
    }

    ///
    /// title of tutorial
    ///
    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    ///
    /// author of tutorial
    ///
    fn author(&self) -> Option<Author> {
        Some(self.author.to_owned())
    }

    ///
    /// comments in order they were posted
    ///
    fn comments(&self) -> Option<Vec<Option<Comment>>> {
        Some(self.comments.iter().cloned().map(Some).collect())
    }
}

use crate::types::{Author, Comment, Tutorial};

///
/// Context for Juniper
///
/// Holds the tutorial fixture. It is filled once by `populate` and only read afterwards.
///
#[derive(Clone, Debug)]
pub struct Database {
    tutorials: Vec<Tutorial>,
}

impl juniper::Context for Database {}

impl Database {
    pub fn new(tutorials: Vec<Tutorial>) -> Self {
        Self { tutorials }
    }

    /// Builds the demo fixture with a single tutorial.
    pub fn populate() -> Self {
        let author = Author::new("Yogie", vec![1]);
        let tutorial = Tutorial {
            id: 1,
            title: "Go GraphQL Tutorial".into(),
            author,
            comments: vec![Comment::new("First Comment")],
        };
        Self::new(vec![tutorial])
    }

    pub fn tutorials(&self) -> &[Tutorial] {
        &self.tutorials
    }

    /// First tutorial with given id
    pub fn tutorial(&self, id: i32) -> Option<&Tutorial> {
        self.tutorials.iter().find(|tutorial| tutorial.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_holds_single_tutorial() {
        let db = Database::populate();
        assert_eq!(db.tutorials().len(), 1);
        let tutorial = &db.tutorials()[0];
        assert_eq!(tutorial.id, 1);
        assert_eq!(tutorial.title, "Go GraphQL Tutorial");
        assert_eq!(tutorial.author, Author::new("Yogie", vec![1]));
        assert_eq!(tutorial.comments, vec![Comment::new("First Comment")]);
    }

    #[test]
    fn tutorial_lookup_by_id() {
        let db = Database::populate();
        assert_eq!(db.tutorial(1).map(|t| t.id), Some(1));
        assert!(db.tutorial(99).is_none());
    }

    #[test]
    fn author_tutorials_are_not_validated() {
        let tutorial = Tutorial {
            id: 7,
            title: "Orphan".into(),
            author: Author::new("Nobody", vec![42, 43]),
            comments: Vec::new(),
        };
        let db = Database::new(vec![tutorial]);
        assert!(db.tutorial(42).is_none());
        assert_eq!(db.tutorial(7).map(|t| t.author.tutorials.clone()), Some(vec![42, 43]));
    }

    #[test]
    fn first_match_wins_on_duplicate_ids() {
        let tutorial = |title: &str| Tutorial {
            id: 2,
            title: title.into(),
            author: Author::default(),
            comments: Vec::new(),
        };
        let db = Database::new(vec![tutorial("first"), tutorial("second")]);
        assert_eq!(db.tutorial(2).map(|t| t.title.as_str()), Some("first"));
    }
}

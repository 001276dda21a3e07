use fieldmap::Record;

/// Sample record. `comment` is private, so it never shows up in a mapping
/// and is never written by `populate`.
#[derive(Record, Debug, Default, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: isize,
    pub average_mark: f32,
    comment: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        age: isize,
        average_mark: f32,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            average_mark,
            comment: comment.into(),
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

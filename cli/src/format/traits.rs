/// A single-bookmark renderer for one of the `list` views
pub trait BookmarkFormat {
    fn to_string(&self) -> String;
}

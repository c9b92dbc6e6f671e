/// Tables to restrict a dump to (empty means all tables) and tables to leave out
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>
}

impl TableFilter {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> TableFilter {
        TableFilter { include, exclude }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

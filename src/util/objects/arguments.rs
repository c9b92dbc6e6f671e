pub const DEFAULT_CONFIG: &str = "/etc/dbtools/config.json";

#[derive(Clone, Debug, Default)]
pub struct Arguments {
    pub operation: String,
    pub targets: Vec<String>, // Positional arguments following the operation
    pub config: String,
    pub name: Option<String>,
    pub output: Option<String>,
    pub tables: Vec<String>,
    pub exclude: Vec<String>,
    pub lenient: bool,
    pub timeout: Option<u64>,
    pub dry_run: bool,
    pub verbose: bool,
    pub debug: bool,
    pub quiet: bool
}

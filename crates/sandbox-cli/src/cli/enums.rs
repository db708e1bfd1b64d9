use clap::ValueEnum;

/// Output format for `sandbox entries`
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum EntriesFormat {
    /// Pretty-printed JSON object (`{ "name": "/abs/path/index.html" }`)
    #[value(name = "json")]
    Json,

    /// One `name<TAB>path` pair per line
    #[value(name = "lines")]
    Lines,
}

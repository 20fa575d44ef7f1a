/// How chatty the solver is. Each level maps to the most detailed `tracing`
/// level that is still printed.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum Verbosity {
    /// Errors only
    Silent,
    /// Warnings and errors
    Quiet,
    /// Search progress and statistics
    #[default]
    Normal,
    /// Goal and termination details
    Verbose,
    /// Every expansion
    Trace,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Quiet => tracing::Level::WARN,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Trace => tracing::Level::TRACE,
        }
    }
}

use tracing::Level;
use tracing_subscriber::{
    filter::FromEnvError, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

pub mod propagate;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Init(#[from] tracing_subscriber::util::TryInitError),

    #[error("invalid RUST_LOG: {0}")]
    EnvFilter(#[from] FromEnvError),
}

pub struct TracingBuilder {
    level: Level,
    ansi: bool,
}

impl Default for TracingBuilder {
    fn default() -> Self {
        TracingBuilder {
            level: Level::INFO,
            ansi: true,
        }
    }
}

impl TracingBuilder {
    /// Set the log level for the stderr layer. RUST_LOG still has a higher
    /// priority over this value.
    pub fn level(mut self, level: Level) -> TracingBuilder {
        self.level = level;
        self
    }

    /// Disable colored output, e.g. when stderr is redirected into a file.
    pub fn disable_ansi(mut self) -> TracingBuilder {
        self.ansi = false;
        self
    }

    fn env_filter(&self) -> Result<EnvFilter, Error> {
        Ok(EnvFilter::builder()
            .with_default_directive(self.level.into())
            .from_env()?)
    }

    /// This will setup tracing based on the configuration passed in.
    /// It will setup a stderr writer output layer and a EnvFilter based on the provided log
    /// level (RUST_LOG still has a higher priority over the configured value).
    ///
    /// Only one global subscriber can be installed per process, calling this a
    /// second time returns [Error::Init].
    pub fn build(self) -> Result<(), Error> {
        tracing_subscriber::registry()
            .with(self.env_filter()?)
            .with(
                tracing_subscriber::fmt::Layer::new()
                    .with_writer(std::io::stderr)
                    .with_ansi(self.ansi)
                    .compact(),
            )
            .try_init()?;

        Ok(())
    }
}

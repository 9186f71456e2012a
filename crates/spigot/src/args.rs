use crate::error::SpigotError;
use crate::runner::RunConfig;
use clap::Parser;
use spigot_params::specs::defaults;

#[derive(Parser, Debug, Clone)]
#[command(name = "spigot", about = "Print decimal digits of π in 4-digit groups")]
pub struct Args {
    /// Number of decimal digits to generate, rounded up to whole 4-digit groups
    #[arg(
        long,
        short = 'n',
        default_value_t = defaults::DIGITS as i64,
        allow_negative_numbers = true
    )]
    pub digits: i64,

    /// Give up if generation takes longer than this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Check the digits against the built-in reference expansion of π
    #[arg(long)]
    pub verify: bool,
}

impl Args {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), SpigotError> {
        self.digit_count().map(|_| ())
    }

    /// Requested digit count as the generator takes it
    pub fn digit_count(&self) -> Result<usize, SpigotError> {
        if self.digits <= 0 {
            return Err(SpigotError::InvalidArgument {
                requested: self.digits,
            });
        }
        // Only reachable where usize is narrower than i64
        usize::try_from(self.digits).map_err(|_| SpigotError::ArithmeticOverflow {
            digit_count: usize::MAX,
        })
    }

    /// Convert Args to RunConfig
    pub fn to_run_config(&self) -> Result<RunConfig, SpigotError> {
        Ok(RunConfig {
            digits: self.digit_count()?,
            timeout_ms: self.timeout_ms,
            verify: self.verify,
        })
    }
}

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use u_sampling::random::{clock_seed, create_source};
use u_sampling::{Session, SessionConfig, TriangularInput};

/// Command line options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
struct Options {
    /// Seed for the uniform source. Defaults to the current time in seconds.
    #[arg(long, value_name = "NUM")]
    seed: Option<u64>,

    /// Sample the triangular distribution with min=1, max=100, mode=50,
    /// ignoring the values entered.
    #[arg(long = "fixed-triangular")]
    fixed_triangular: bool,

    /// Reject out-of-domain parameters instead of printing NaN or inf.
    #[arg(long)]
    strict: bool,
}

impl Options {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            triangular: if self.fixed_triangular {
                TriangularInput::FixedLiteral
            } else {
                TriangularInput::UserSupplied
            },
            strict: self.strict,
        }
    }
}

fn main() -> ExitCode {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    let seed = options.seed.unwrap_or_else(clock_seed);
    debug!("uniform source seed: {seed}");

    let mut session = Session::new(
        io::stdin().lock(),
        io::stdout().lock(),
        create_source(seed),
        options.session_config(),
    );

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;
use std::time::{Duration, SystemTime};

use clap::Parser;
use report_service::{mint_access_token, AuthGate, SecurityConfig};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "token-cli")]
#[command(about = "Issue access tokens accepted by the report services")]
struct Args {
    /// Numeric user id written to the `sub` claim
    #[arg(short, long, allow_negative_numbers = true)]
    user_id: i64,

    /// Override AUTH_JWT_TTL_MINUTES for this token (at least 1)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    ttl_minutes: Option<u64>,

    /// Verify the minted token with the same configuration before printing it
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the token.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter("token_cli=info,report_service=warn")
        .init();

    let args = Args::parse();

    let mut security = match SecurityConfig::from_env() {
        Ok(security) => security,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(minutes) = args.ttl_minutes {
        security = security.with_token_ttl(Duration::from_secs(minutes * 60));
    }

    let token = match mint_access_token(args.user_id, SystemTime::now(), &security) {
        Ok(token) => token,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.check {
        match AuthGate::new(&security).authenticate(&token) {
            Ok(identity) => info!(user_id = identity.user_id(), "token verified"),
            Err(e) => {
                error!(reason = e.reason_code(), "minted token failed verification");
                return ExitCode::FAILURE;
            }
        }
    }

    info!(
        user_id = args.user_id,
        ttl_secs = security.token_ttl.as_secs(),
        "token issued"
    );
    println!("{token}");
    ExitCode::SUCCESS
}

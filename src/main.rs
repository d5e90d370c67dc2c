use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use coursepoints::config::{self, ClientConfig, DEFAULT_REQUEST_TIMEOUT_SECS, Timeouts};
use coursepoints::{ApiClient, ClientError, FileSessionStore, HomeEntry, HomePage, auth, render};
use model::input::{LOGIN_FAILED, SIGNUP_FAILED};
use model::{CourseId, HomeState};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "coursepoints", about = "Course catalog and referral client")]
struct Cli {
    #[arg(long, env = "COURSEPOINTS_API_URL", default_value = model::wire::DEFAULT_API_ORIGIN)]
    api_url: String,

    /// Session file; defaults to the platform data directory.
    #[arg(long, env = "COURSEPOINTS_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[arg(long, env = "COURSEPOINTS_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "COURSEPOINTS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "COURSEPOINTS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the point balance and course catalog.
    Home,
    Referral(ReferralCommand),
}

#[derive(Args, Debug)]
struct ReferralCommand {
    #[command(subcommand)]
    command: ReferralSubcommand,
}

#[derive(Subcommand, Debug)]
enum ReferralSubcommand {
    /// Generate a referral code for a course (first course by default).
    Create {
        #[arg(long)]
        course: Option<String>,
    },
    /// Redeem a referral code and show the new point balance.
    Verify {
        code: String,
        #[arg(long)]
        course: Option<String>,
    },
}

struct Context {
    api: ApiClient,
    store: FileSessionStore,
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env");
        }
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, ClientError> {
    let timeouts = Timeouts { request_secs: cli.timeout_secs, ..Timeouts::default() };
    let client_config = ClientConfig::new(&cli.api_url, timeouts);
    let ctx = Context {
        api: ApiClient::new(&client_config)?,
        store: FileSessionStore::new(config::session_path(cli.session_file)?),
    };
    tracing::debug!(api_url = ctx.api.api_url(), session = %ctx.store.path().display(), "client ready");

    match cli.command {
        Command::Login { email, password } => {
            let result = auth::login(&ctx.api, &ctx.store, &email, &password).await;
            let Some(session) = report_rejection(result, LOGIN_FAILED)? else {
                return Ok(ExitCode::FAILURE);
            };
            println!("Logged in as {}", session.email.as_deref().unwrap_or_default());
            Ok(ExitCode::SUCCESS)
        }
        Command::Signup { name, email, password } => {
            let result = auth::signup(&ctx.api, &name, &email, &password).await;
            let Some(message) = report_rejection(result, SIGNUP_FAILED)? else {
                return Ok(ExitCode::FAILURE);
            };
            println!("{}", message.as_deref().unwrap_or("Signed up; now run `coursepoints login`"));
            Ok(ExitCode::SUCCESS)
        }
        Command::Logout => {
            let route = auth::logout(&ctx.store)?;
            println!("Logged out (next: {})", route.path());
            Ok(ExitCode::SUCCESS)
        }
        Command::Home => {
            let state = enter_home(&ctx).await?;
            print!("{}", render::home(&state));
            Ok(exit_for(&state))
        }
        Command::Referral(referral) => run_referral(&ctx, referral).await,
    }
}

async fn run_referral(ctx: &Context, referral: ReferralCommand) -> Result<ExitCode, ClientError> {
    let page = HomePage::new(&ctx.api, &ctx.store);
    let mut state = enter_home(ctx).await?;

    match referral.command {
        ReferralSubcommand::Create { course } => {
            let course_id = course.as_deref().map(CourseId::from);
            page.generate_referral_code(&mut state, course_id).await?;
            match (&state.generated_code, &state.error) {
                (Some(code), None) => println!("Your Referral Code: {code}"),
                (_, Some(error)) => eprintln!("error: {error}"),
                (None, None) => {}
            }
        }
        ReferralSubcommand::Verify { code, course } => {
            if let Some(course) = course.as_deref() {
                state.select_course(CourseId::from(course));
            }
            state.referral_input = code;
            page.verify_referral_code(&mut state).await?;
            match &state.error {
                None => println!("Your Points: {}", state.points_label()),
                Some(error) => eprintln!("error: {error}"),
            }
        }
    }
    Ok(exit_for(&state))
}

async fn enter_home(ctx: &Context) -> Result<HomeState, ClientError> {
    match HomePage::new(&ctx.api, &ctx.store).enter().await? {
        HomeEntry::RedirectToLogin => Err(ClientError::NotLoggedIn),
        HomeEntry::Ready(state) => Ok(state),
    }
}

/// Print a backend rejection the way the login and signup forms show it.
/// Other errors propagate unchanged.
fn report_rejection<T>(result: Result<T, ClientError>, fallback: &str) -> Result<Option<T>, ClientError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e @ ClientError::Rejected { .. }) => {
            tracing::debug!(error = %e, "request rejected");
            eprintln!("error: {}", e.failure().message_or(fallback));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn exit_for(state: &HomeState) -> ExitCode {
    if state.error.is_some() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

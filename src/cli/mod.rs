//! Command line front end
//!
//! Each entity command mounts a list screen, performs one operation through
//! it and prints the resulting rows and notification.

pub mod commands;

use crate::auth::{self, AuthService, SessionContext};
use crate::config::Config;
use crate::core::gateway::{ApiClient, Gateway, RestGateway};
use crate::core::models::{Batch, Candidate, Credentials, Enrollment, Entity, Session};
use crate::core::screen::{ListScreen, Lookup, ScreenLifetime};
use crate::core::store::ViewMode;
use crate::utils::error::{BatchDeskError, Result};
use crate::utils::logging::LogFormat;
use crate::utils::truncate_string;
use async_trait::async_trait;
use clap::Parser;
use commands::{Commands, EntityCommand, ListArgs};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

const SUMMARY_WIDTH: usize = 100;

#[derive(Parser, Debug)]
#[command(
    name = "batchdesk",
    version,
    about = "Manage training batches, candidates, enrollments and sessions"
)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "BATCHDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output; repeat for trace
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Shared handles for one command run
struct Context {
    config: Config,
    session: Arc<SessionContext>,
    client: ApiClient,
}

impl Context {
    fn require_login(&self) -> Result<()> {
        if self.session.is_logged_in() {
            Ok(())
        } else {
            Err(BatchDeskError::session(
                "Not logged in; run `batchdesk login` first",
            ))
        }
    }

    fn gateway<E: Entity>(&self) -> RestGateway<E> {
        RestGateway::new(self.client.clone())
    }
}

impl Cli {
    pub fn log_format(&self) -> LogFormat {
        if self.json_logs {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }

    /// Run the command; `Ok(false)` means the server reported a failure
    pub async fn run(self) -> Result<bool> {
        let config = Config::load(self.config.as_deref()).await?;
        let session = auth::open_session(config.session())?;
        let client = ApiClient::new(config.api(), session.clone())?;
        let context = Context {
            config,
            session,
            client,
        };
        debug!(base_url = %context.client.base_url(), "context ready");

        match self.command {
            Commands::Login(args) => login(&context, args.email, args.password).await,
            Commands::Logout => {
                AuthService::new(context.client.clone()).logout()?;
                println!("Logged out");
                Ok(true)
            }
            Commands::Whoami => {
                whoami(&context);
                Ok(context.session.is_logged_in())
            }
            Commands::Batches(command) => run_entity::<Batch>(&context, command).await,
            Commands::Candidates(command) => run_entity::<Candidate>(&context, command).await,
            Commands::Enrollments(command) => run_entity::<Enrollment>(&context, command).await,
            Commands::Sessions(command) => run_entity::<Session>(&context, command).await,
        }
    }
}

async fn login(context: &Context, email: String, password: String) -> Result<bool> {
    let service = AuthService::new(context.client.clone());
    let outcome = service.login(&Credentials::new(email, password)).await?;
    if outcome.succeeded {
        let name = outcome
            .payload
            .as_ref()
            .map(|user| user.display_name().to_string())
            .unwrap_or_default();
        println!("Logged in {}", name);
    } else {
        eprintln!("Login failed: {}", outcome.display_message());
    }
    Ok(outcome.succeeded)
}

fn whoami(context: &Context) {
    match (context.session.is_logged_in(), context.session.user()) {
        (false, _) => println!("Not logged in"),
        (true, Some(user)) => println!("{} <{}> {}", user.display_name(), user.email, user.role),
        (true, None) => println!("Logged in"),
    }
}

/// Entity-specific steps around the generic screen
#[async_trait]
trait CliEntity: Entity {
    /// Fill references the submitted JSON left out
    async fn resolve(_draft: &mut Self, _context: &Context, _lifetime: ScreenLifetime) {}
}

impl CliEntity for Batch {}

impl CliEntity for Candidate {}

#[async_trait]
impl CliEntity for Enrollment {
    async fn resolve(draft: &mut Self, context: &Context, lifetime: ScreenLifetime) {
        if draft.batch_id.is_some() && draft.candidate_id.is_some() {
            return;
        }
        let batches = Lookup::new(context.gateway::<Batch>(), lifetime.clone());
        let candidates = Lookup::new(context.gateway::<Candidate>(), lifetime);
        futures::join!(batches.load(), candidates.load());
        draft.resolve_references(&batches.items(), &candidates.items());
    }
}

#[async_trait]
impl CliEntity for Session {
    async fn resolve(draft: &mut Self, context: &Context, lifetime: ScreenLifetime) {
        if draft.batch_id > 0 {
            return;
        }
        let batches = Lookup::new(context.gateway::<Batch>(), lifetime);
        batches.load().await;
        draft.resolve_batch(&batches.items());
    }
}

async fn run_entity<E: CliEntity>(context: &Context, command: EntityCommand) -> Result<bool> {
    context.require_login()?;
    let screen = ListScreen::new(context.gateway::<E>(), context.config.ui());

    let mounted = screen.mount().await;
    let succeeded = match command {
        EntityCommand::List(args) => {
            if mounted.succeeded {
                print_list(&screen, &args);
            }
            mounted.succeeded
        }
        EntityCommand::Save(args) => {
            let mut submitted: E = serde_json::from_str(&args.json)?;
            E::resolve(&mut submitted, context, screen.lifetime()).await;
            if submitted.is_persisted() {
                screen.open_edit_with(submitted.id(), |draft| *draft = submitted.clone())?;
            } else {
                screen.open_add();
                screen.edit_draft(|draft| *draft = submitted.clone())?;
            }
            let outcome = screen.save().await?;
            if let Some(saved) = &outcome.payload {
                println!("{:>6}  {}", saved.id(), saved.summary());
            }
            outcome.succeeded
        }
        EntityCommand::Delete(args) => screen.delete(args.id).await.succeeded,
    };

    if let Some(notification) = screen.notification() {
        let line = format!("[{}] {}", notification.title, notification.message);
        if notification.succeeded {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    }

    info!(entity = E::LABEL, succeeded, "command finished");
    screen.teardown();
    Ok(succeeded)
}

fn print_list<E: Entity, G: Gateway<E>>(
    screen: &ListScreen<E, G>,
    args: &ListArgs,
) {
    screen.toggle_view(args.view);
    if args.page != screen.current_page() && !screen.change_page(args.page) {
        eprintln!(
            "Page {} is out of range; showing page {}",
            args.page,
            screen.current_page()
        );
    }

    let rows = screen.window();
    match screen.view_mode() {
        ViewMode::Table => {
            for row in &rows {
                println!("{:>6}  {}", row.id(), truncate_string(&row.summary(), SUMMARY_WIDTH));
            }
        }
        ViewMode::Card => {
            for row in &rows {
                match serde_json::to_string_pretty(row) {
                    Ok(card) => println!("{}\n", card),
                    Err(e) => eprintln!("Cannot render {} {}: {}", E::LABEL, row.id(), e),
                }
            }
        }
    }
    println!(
        "Page {} of {} ({} {} rows)",
        screen.current_page(),
        screen.page_count(),
        screen.len(),
        E::LABEL.to_lowercase()
    );
}

use anyhow::{anyhow, Result};
use brewly_application::{error::AppError, prelude as flows};
use brewly_core::{
    entities::*,
    feed::{Feed, FeedItem, FeedStatus},
    saved::{SavedCafes, EXPORT_FILE_NAME},
    usecases,
};
use brewly_db_sqlite::Connections;
use brewly_gateways::{json_file_storage::JsonFileStorage, maps::GoogleMaps};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::{fmt, fs, path::PathBuf};

use crate::{config::Config, render};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show all reviews, newest first
    Feed {
        /// Only show cafés whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show your own reviews
    Mine {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a single review
    Show { id: String },
    /// Review a café
    Submit(SubmitArgs),
    /// Change one of your reviews
    Edit {
        id: String,
        #[command(flatten)]
        update: EditArgs,
    },
    /// Save the café of a review on this device or remove it
    Save { id: String },
    /// Show the cafés saved on this device
    Saved,
    /// Write the cafés saved on this device into a JSON file
    ExportSaved {
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Bookmark a café in your account or remove the bookmark
    Bookmark { cafe_id: String },
    /// Show the cafés bookmarked in your account
    Bookmarks,
}

#[derive(ClapArgs, Debug)]
pub struct SubmitArgs {
    /// Your name
    #[arg(long)]
    name: Option<String>,
    /// Your email address
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    cafe: Option<String>,
    #[arg(long)]
    address: Option<String>,
    /// quiet, medium or loud
    #[arg(long)]
    noise: Option<String>,
    #[arg(long)]
    wifi: Option<bool>,
    #[arg(long)]
    outlets: Option<bool>,
    #[arg(long)]
    laptop_friendly: Option<bool>,
    /// Early morning, Morning, Afternoon, Evening, Night, Random or any other text
    #[arg(long)]
    rush_hours: Option<String>,
    /// cozy, bright, minimal or busy
    #[arg(long)]
    ambience: Option<String>,
    /// 1 to 5 stars
    #[arg(long)]
    overall: Option<i64>,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
}

impl From<SubmitArgs> for usecases::NewReview {
    fn from(from: SubmitArgs) -> Self {
        let SubmitArgs {
            name,
            email,
            cafe,
            address,
            noise,
            wifi,
            outlets,
            laptop_friendly,
            rush_hours,
            ambience,
            overall,
            notes,
            image_url,
        } = from;
        Self {
            reviewer_name: name.unwrap_or_default(),
            reviewer_email: email.unwrap_or_default(),
            cafe_name: cafe.unwrap_or_default(),
            address,
            noise,
            wifi,
            outlets,
            laptop_friendly,
            rush_hours,
            ambience,
            overall,
            notes: notes.unwrap_or_default(),
            image_url,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct EditArgs {
    #[arg(long)]
    noise: Option<String>,
    #[arg(long)]
    wifi: Option<bool>,
    #[arg(long)]
    outlets: Option<bool>,
    #[arg(long)]
    rush_hours: Option<String>,
    #[arg(long)]
    ambience: Option<String>,
    #[arg(long)]
    overall: Option<i64>,
    #[arg(long)]
    notes: Option<String>,
}

impl From<EditArgs> for usecases::ReviewUpdate {
    fn from(from: EditArgs) -> Self {
        let EditArgs {
            noise,
            wifi,
            outlets,
            rush_hours,
            ambience,
            overall,
            notes,
        } = from;
        Self {
            noise,
            wifi,
            outlets,
            rush_hours,
            ambience,
            overall,
            notes,
        }
    }
}

struct Context {
    cfg: Config,
}

impl Context {
    fn connections(&self) -> brewly_application::Result<Connections> {
        let db = &self.cfg.db;
        log::debug!("Connecting to SQLite database {}", db.conn_sqlite);
        flows::open_database(&db.conn_sqlite, db.conn_pool_size.into())
    }

    fn saved_cafes(&self) -> Result<SavedCafes<JsonFileStorage>> {
        let storage = JsonFileStorage::try_new(&self.cfg.storage.dir)?;
        log::debug!("Local storage: {}", storage.path().display());
        Ok(SavedCafes::new(storage))
    }

    fn owner(&self) -> Result<&str> {
        self.cfg.user.id.as_deref().ok_or_else(|| {
            anyhow!("Please sign in first: configure [user] id or set BREWLY_USER")
        })
    }
}

// Causes of failed operations have already been logged.
fn report(err: AppError) -> anyhow::Error {
    match err {
        AppError::ValidationFailed(inv) => {
            anyhow!("Please check your input:\n{}", render::invalidations(&inv))
        }
        AppError::RemoteOperationFailed {
            cause: usecases::Error::ReviewNotFound,
            ..
        } => anyhow!(render::REVIEW_NOT_FOUND),
        AppError::RemoteOperationFailed {
            cause: usecases::Error::CafeNotFound,
            ..
        } => anyhow!(render::CAFE_NOT_FOUND),
        AppError::RemoteOperationFailed { .. } => anyhow!(render::OPERATION_FAILED),
    }
}

fn load_feed<T, E>(search: Option<String>, fetch: impl FnOnce() -> Result<Vec<T>, E>) -> Feed<T>
where
    T: FeedItem,
    E: fmt::Display,
{
    let mut feed = Feed::new();
    if let Some(search) = search {
        feed.set_search(search);
    }
    let ticket = feed.load();
    let applied = feed.apply(ticket, fetch());
    debug_assert!(applied);
    feed
}

fn print_reviews(feed: &Feed<Review>, saved: &SavedCafes<JsonFileStorage>) {
    if let Some(msg) = render::empty_state(feed.status(), render::NO_REVIEWS) {
        println!("{msg}");
        return;
    }
    let saved_ids: Vec<_> = saved.load().into_iter().map(|cafe| cafe.id).collect();
    for review in feed.visible() {
        println!("{}", render::review_card(review, saved_ids.contains(&review.id)));
    }
}

fn print_saved_cafes(feed: &Feed<SavedCafe>) {
    if let Some(msg) = render::empty_state(feed.status(), render::NO_SAVED_CAFES) {
        println!("{msg}");
        return;
    }
    for cafe in feed.visible() {
        println!("{}", render::saved_cafe_line(cafe));
    }
}

pub fn run(args: Args) -> Result<()> {
    let Args { config, command } = args;
    let cfg = Config::try_load_from_file_or_default(config.as_deref())?;
    let ctx = Context { cfg };

    match command {
        Command::Feed { search } => {
            let feed = load_feed(search, || {
                ctx.connections()
                    .and_then(|connections| flows::fetch_reviews(&connections))
            });
            print_reviews(&feed, &ctx.saved_cafes()?);
        }
        Command::Mine { search } => {
            let owner = ctx.owner()?;
            let feed = load_feed(search, || {
                ctx.connections()
                    .and_then(|connections| flows::fetch_my_reviews(&connections, Some(owner)))
            });
            print_reviews(&feed, &ctx.saved_cafes()?);
        }
        Command::Show { id } => {
            let connections = ctx.connections().map_err(report)?;
            let review = flows::get_review(&connections, &id).map_err(report)?;
            println!("{}", render::review_details(&review, &GoogleMaps));
        }
        Command::Submit(submit_args) => {
            let owner = ctx.owner()?;
            let connections = ctx.connections().map_err(report)?;
            let new_review = usecases::NewReview::from(submit_args);
            let review =
                flows::submit_review(&connections, Some(owner), new_review).map_err(report)?;
            // Show the new review immediately, then reconcile with the stored list
            let mut feed = Feed::new();
            let ticket = feed.submit(review.clone());
            println!("{}", render::review_card(&review, false));
            let applied = feed.apply(ticket, flows::fetch_my_reviews(&connections, Some(owner)));
            debug_assert!(applied);
            if let Some(summary) = render::written_reviews(feed.status()) {
                println!("{summary}");
            }
        }
        Command::Edit { id, update } => {
            let owner = ctx.owner()?;
            let connections = ctx.connections().map_err(report)?;
            let review = flows::update_review(&connections, Some(owner), &id, update.into())
                .map_err(report)?;
            println!("{}", render::review_details(&review, &GoogleMaps));
        }
        Command::Save { id } => {
            let feed = load_feed(None, || {
                ctx.connections()
                    .and_then(|connections| flows::fetch_reviews(&connections))
            });
            if feed.status() == FeedStatus::Failed {
                return Err(anyhow!(render::FETCH_FAILED));
            }
            let saved = ctx.saved_cafes()?;
            match feed.toggle_save(&saved, &id)? {
                Some(toggled) => println!("{toggled}"),
                None => return Err(anyhow!("Review {id} not found")),
            }
        }
        Command::Saved => {
            let saved = ctx.saved_cafes()?;
            let feed = load_feed(None, || Ok::<_, std::convert::Infallible>(saved.load()));
            print_saved_cafes(&feed);
        }
        Command::ExportSaved { output } => {
            let saved = ctx.saved_cafes()?;
            let Some(json) = saved.export()? else {
                println!("{}", render::NO_SAVED_CAFES);
                return Ok(());
            };
            let output = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            fs::write(&output, json)?;
            println!("Exported saved cafés to {}", output.display());
        }
        Command::Bookmark { cafe_id } => {
            let owner = ctx.owner()?;
            let connections = ctx.connections().map_err(report)?;
            let toggled =
                flows::toggle_saved_cafe(&connections, Some(owner), &cafe_id).map_err(report)?;
            println!("{toggled}");
        }
        Command::Bookmarks => {
            let owner = ctx.owner()?;
            let feed = load_feed(None, || {
                ctx.connections()
                    .and_then(|connections| flows::fetch_saved_cafes(&connections, Some(owner)))
            });
            print_saved_cafes(&feed);
        }
    }
    Ok(())
}

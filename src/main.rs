use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use blogpost_client::handlers::auth_handlers::{LoginForm, NavBar, RegisterForm};
use blogpost_client::handlers::post_handlers::{CreatePostForm, EditPostForm, render_feed};
use blogpost_client::repositories::post_repository::PostRepository;
use blogpost_client::services::auth_services::AuthService;
use blogpost_client::{
    ApiClient, ClientConfig, FeedPaginator, FileTokenStore, LoadOutcome, SessionManager,
};

#[derive(Parser)]
#[command(name = "blogpost", version, about = "Command-line client for the BlogPost API")]
struct Cli {
    /// API base URL
    #[arg(long, env = "BLOG_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and persist the access token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account (does not log in)
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    Logout,
    /// Show the current identity
    Whoami,
    /// List posts, newest first
    Posts {
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show a single post in full
    Show { id: i64 },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "")]
        img_url: String,
    },
    /// Edit one of your posts; omitted fields keep their current value
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        img_url: Option<String>,
    },
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut cfg = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url {
        cfg.api_url = url.trim_end_matches('/').to_string();
    }
    info!("API: {}", cfg.api_url);

    let api = ApiClient::from_config(&cfg)?;
    let store = Arc::new(FileTokenStore::new(cfg.data_dir.clone()));
    let mut session = SessionManager::new(AuthService::new(api.clone()), store);
    session.bootstrap().await;

    match cli.command {
        Command::Login { username, password } => {
            let mut form = LoginForm::new(username, password);
            match form.submit(&mut session).await {
                Some(_) => println!("Logged in as {}", username_of(&session)),
                None => anyhow::bail!(form.error().unwrap_or_default().to_string()),
            }
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let mut form = RegisterForm::new(username, email, password);
            match form.submit(&session).await {
                Some(next) => println!("Account created. Log in next ({next})."),
                None => anyhow::bail!(form.error().unwrap_or_default().to_string()),
            }
        }
        Command::Logout => {
            NavBar::logout(&mut session);
            println!("Logged out");
        }
        Command::Whoami => match session.user() {
            Some(user) => {
                println!("{}", user.username);
                if let Some(email) = &user.email {
                    println!("email: {email}");
                }
                if let Some(exp) = session.token_claims().and_then(|c| c.expires_at()) {
                    println!("token expires: {exp}");
                }
            }
            None => println!("Not logged in"),
        },
        Command::Posts { pages } => {
            let feed = FeedPaginator::new(api, session.token().map(str::to_owned));
            if let LoadOutcome::Failed(err) = feed.load_initial().await {
                anyhow::bail!(err.to_string());
            }
            for _ in 1..pages {
                match feed.load_more().await {
                    LoadOutcome::Loaded { .. } => {}
                    LoadOutcome::Skipped | LoadOutcome::Superseded => break,
                    LoadOutcome::Failed(_) => break,
                }
            }
            print!("{}", render_feed(&feed.snapshot(), session.user()));
        }
        Command::Show { id } => {
            let post = PostRepository::get_post(&api, id, session.token())
                .await
                .with_context(|| format!("failed to fetch post {id}"))?;
            println!("{}\n{} · {}\n", post.title, post.author.username, post.display_date());
            if let Some(img) = post.image() {
                println!("image: {img}\n");
            }
            println!("{}", post.content);
        }
        Command::Create {
            title,
            content,
            img_url,
        } => {
            let mut form = CreatePostForm::new(title, content, img_url);
            match form.submit(&api, session.token()).await {
                Some(_) => println!("Post created"),
                None => anyhow::bail!(form.error().unwrap_or_default().to_string()),
            }
        }
        Command::Edit {
            id,
            title,
            content,
            img_url,
        } => {
            let feed = FeedPaginator::new(api.clone(), session.token().map(str::to_owned));
            feed.edit_route(id)?;

            let mut form = EditPostForm::new(id);
            if !form.load(&api, session.token()).await {
                anyhow::bail!(form.error().unwrap_or_default().to_string());
            }
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(content) = content {
                form.content = content;
            }
            if let Some(img_url) = img_url {
                form.img_url = img_url;
            }
            match form.submit(&api, session.token()).await {
                Some(_) => println!("Post {id} updated"),
                None => anyhow::bail!(form.error().unwrap_or_default().to_string()),
            }
        }
        Command::Delete { id } => {
            let feed = FeedPaginator::new(api, session.token().map(str::to_owned));
            feed.delete(id).await?;
            println!("Post {id} deleted");
        }
    }

    Ok(())
}

fn username_of(session: &SessionManager) -> String {
    session
        .user()
        .map(|u| u.username.clone())
        .unwrap_or_default()
}

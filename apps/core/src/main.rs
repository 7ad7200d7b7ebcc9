//! RKD IntelliTech terminal shell
//!
//! Chat with the farming assistant and run the ROI calculator from a terminal.

use anyhow::Context;
use dotenv::dotenv;
use intellitech_core::assistant::{Conversation, QUICK_PROMPTS};
use intellitech_core::config::AppConfig;
use intellitech_core::fs_manager::PortablePathManager;
use intellitech_core::preferences::{
    JsonFileStore, LanguageStore, Locale, MemoryStore, SharedStore, ThemeStore,
};
use intellitech_core::roi::{CropCatalog, RoiEstimator};
use intellitech_core::{AppError, EstimateInput};
use rand::Rng;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  <message>                    ask the assistant
  /roi <acres> <water> <crop>  estimate annual savings
  /crops                       list supported crops
  /prompts                     show suggested questions
  /history                     show this conversation
  /theme [dark|light]          set or toggle the theme
  /lang <en|pa|hi>             change language
  /quit                        exit";

struct Shell {
    config: AppConfig,
    conversation: Conversation,
    themes: ThemeStore<SharedStore>,
    languages: LanguageStore<SharedStore>,
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn open_preferences(paths: &PortablePathManager) -> SharedStore {
    let opened = paths
        .init()
        .map_err(AppError::from)
        .and_then(|_| JsonFileStore::open(paths.preferences_file()));

    match opened {
        Ok(store) => {
            info!("Preferences loaded from {:?}", store.path());
            SharedStore::new(store)
        }
        Err(e) => {
            warn!("Preferences unavailable, keeping them in memory: {}", e);
            SharedStore::new(MemoryStore::new())
        }
    }
}

impl Shell {
    fn new(config: AppConfig) -> anyhow::Result<Self> {
        let store = open_preferences(&PortablePathManager::new(&config.data_dir));
        let mut themes = ThemeStore::load(store.clone())?;
        // A terminal has no colour-scheme query; assume light
        themes.initialize(false)?;
        let languages = LanguageStore::load(store)?;

        Ok(Self {
            config,
            conversation: Conversation::new(),
            themes,
            languages,
        })
    }

    /// Returns `false` when the user asked to quit
    async fn handle_line(&mut self, line: &str) -> bool {
        let line = line.trim();
        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((c, rest)) => (c, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "/quit" | "/exit" => return false,
            "/help" => println!("{}", HELP),
            "/prompts" => {
                for (i, prompt) in QUICK_PROMPTS.iter().enumerate() {
                    println!("  {}. {}", i + 1, prompt);
                }
            }
            "/history" => {
                for message in self.conversation.messages() {
                    println!(
                        "[{}] {:?}: {}",
                        message.sent_at.format("%H:%M:%S"),
                        message.sender,
                        message.text
                    );
                }
            }
            "/crops" => {
                for crop in CropCatalog::builtin().profiles() {
                    println!(
                        "  {:<10} {} (x{})",
                        crop.identifier,
                        self.languages.t(&crop.label_key()),
                        crop.yield_multiplier
                    );
                }
            }
            "/roi" => self.run_estimate(args),
            "/theme" => self.change_theme(args),
            "/lang" => self.change_language(args),
            _ if command.starts_with('/') => println!("Unknown command. Type /help."),
            _ => self.chat(line).await,
        }
        true
    }

    async fn chat(&mut self, text: &str) {
        if self.config.typing_delay {
            let delay = rand::thread_rng().gen_range(1000..2000);
            println!("assistant is typing...");
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if let Some(reply) = self.conversation.send(text) {
            println!("assistant: {}", reply.text);
        }
    }

    fn run_estimate(&self, args: &str) {
        let parts: Vec<&str> = args.split_whitespace().collect();
        let [acres, water, crop] = parts.as_slice() else {
            println!("Usage: /roi <acres> <monthly water cost> <crop>");
            return;
        };
        let (Ok(acres), Ok(water)) = (acres.parse::<f64>(), water.parse::<f64>()) else {
            println!("Please fill in all fields with numbers");
            return;
        };

        let estimator =
            RoiEstimator::default().with_policy(self.config.unknown_crop_policy);
        match estimator.estimate(&EstimateInput::new(acres, water, *crop)) {
            Ok(result) => {
                let lang = &self.languages;
                println!("{}", lang.t("roi.result.title"));
                println!("  {}: ₹{}", lang.t("roi.result.water"), result.water_savings);
                println!("  {}: ₹{}", lang.t("roi.result.yield"), result.yield_increase_value);
                println!("  {}: ₹{}", lang.t("roi.result.total"), result.total_savings);
            }
            Err(e) => println!("{}", e),
        }
    }

    fn change_theme(&mut self, args: &str) {
        let result = match args {
            "" => self.themes.toggle(),
            "dark" => self.themes.set_dark(true).map(|_| self.themes.theme()),
            "light" => self.themes.set_dark(false).map(|_| self.themes.theme()),
            _ => {
                println!("Usage: /theme [dark|light]");
                return;
            }
        };
        match result {
            Ok(theme) => println!("Theme: {:?}", theme),
            Err(e) => error!("Failed to change theme: {}", e),
        }
    }

    fn change_language(&mut self, args: &str) {
        match args.parse::<Locale>() {
            Ok(locale) => match self.languages.set_language(locale) {
                Ok(()) => println!("Language: {}", locale.native_name()),
                Err(e) => error!("Failed to change language: {}", e),
            },
            Err(e) => println!("{}", e),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(&config);

    let mut shell = Shell::new(config)?;
    println!("RKD IntelliTech | {}", shell.languages.t("roi.subtitle"));
    if let Some(welcome) = shell.conversation.messages().first() {
        println!("assistant: {}", welcome.text);
    }
    println!("Type /help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !shell.handle_line(&line).await {
            break;
        }
    }

    info!("Session {} ended", shell.conversation.session_id());
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use routine_picker::core::render;
use routine_picker::domain::model::{Product, Reply};
use routine_picker::domain::ports::ConfigProvider;
use routine_picker::utils::error::ErrorSeverity;
use routine_picker::utils::{logger, validation::Validate};
use routine_picker::{
    format_chat_text, AppError, Assistant, Catalog, CliConfig, Command, FilterOutcome,
    HttpChatClient, LocalStorage, Selection, Settings, TomlConfig,
};
use std::io::Read;

type CliAssistant = Assistant<HttpChatClient, LocalStorage>;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 載入設定檔 (可選)
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    let logging = file_config.logging.clone().unwrap_or_default();
    logger::init_cli_logger(
        cli.verbose || logging.verbose.unwrap_or(false),
        cli.json_logs || logging.json.unwrap_or(false),
    );
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = file_config.validate() {
        exit_with(&e);
    }

    let settings = Settings::resolve(file_config, cli.overrides());
    if let Err(e) = settings.validate() {
        exit_with(&e);
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = run(&settings, cli.command).await {
        match e.downcast_ref::<AppError>() {
            Some(app_error) => exit_with(app_error),
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn exit_with(e: &AppError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn run(settings: &Settings, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Format { file } => {
            let text = read_input(file.as_deref())?;
            println!("{}", format_chat_text(&text));
        }
        Command::Products { category, search } => {
            let catalog = Catalog::from_file(settings.products_path()).await?;
            let assistant = open_assistant(settings).await?;
            match catalog.filter(category.as_deref(), &search) {
                FilterOutcome::Products(products) => {
                    for product in &products {
                        print_product(product, assistant.selection());
                    }
                }
                FilterOutcome::Empty(reason) => println!("{}", reason.message()),
            }
        }
        Command::Categories => {
            let catalog = Catalog::from_file(settings.products_path()).await?;
            for category in catalog.categories() {
                println!("{}", category);
            }
        }
        Command::Toggle { ids } => {
            let catalog = Catalog::from_file(settings.products_path()).await?;
            let mut assistant = open_assistant(settings).await?;
            for id in ids {
                let product = catalog
                    .get(id)
                    .ok_or(AppError::UnknownProductError { id })?;
                let selected = assistant.toggle_product(product).await?;
                println!(
                    "{} {}",
                    if selected { "Selected" } else { "Deselected" },
                    product.name
                );
            }
            print_selection(assistant.selection());
        }
        Command::Remove { ids } => {
            let mut assistant = open_assistant(settings).await?;
            for id in ids {
                if !assistant.remove_product(id).await? {
                    tracing::warn!("Product {} was not selected", id);
                }
            }
            print_selection(assistant.selection());
        }
        Command::Selected => {
            let assistant = open_assistant(settings).await?;
            print_selection(assistant.selection());
        }
        Command::Clear => {
            let mut assistant = open_assistant(settings).await?;
            assistant.clear_selection().await?;
            print_selection(assistant.selection());
        }
        Command::Routine { html } => {
            let mut assistant = open_assistant(settings).await?;
            if !html {
                eprintln!("🔮 Creating your personalized routine...");
            }
            let reply = assistant.generate_routine().await.inspect_err(|e| {
                if html {
                    match e {
                        AppError::EmptySelectionError => {
                            println!("{}", render::empty_selection_notice())
                        }
                        _ => println!("{}", render::routine_error()),
                    }
                }
            })?;
            print_reply(&reply, html);
        }
        Command::Chat { message, html } => {
            let mut assistant = open_assistant(settings).await?;
            let message = message.join(" ");
            if html {
                println!("{}", render::user_message(&message));
            }
            let reply = assistant.send_message(&message).await.inspect_err(|_| {
                if html {
                    println!("{}", render::error_message());
                }
            })?;
            print_reply(&reply, html);
        }
    }
    Ok(())
}

async fn open_assistant(settings: &Settings) -> anyhow::Result<CliAssistant> {
    let client = HttpChatClient::new(settings)?;
    let storage = LocalStorage::new(settings.state_dir().to_string());
    tracing::debug!(
        "Using chat endpoint {} with state in {}",
        client.endpoint(),
        settings.state_dir()
    );
    Ok(Assistant::load(client, storage).await)
}

fn read_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("Cannot read '{}'", path))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Cannot read stdin")?;
            Ok(text)
        }
    }
}

fn print_product(product: &Product, selection: &Selection) {
    let marker = if selection.contains(product.id) { "x" } else { " " };
    println!(
        "[{}] {:>4}  {} - {} ({})",
        marker, product.id, product.brand, product.name, product.category
    );
}

fn print_selection(selection: &Selection) {
    if selection.is_empty() {
        println!("No products selected yet. Use `toggle <id>` to add products to your routine.");
        return;
    }
    println!("Selected products ({}):", selection.len());
    for product in selection.products() {
        println!("  {:>4}  {} - {}", product.id, product.brand, product.name);
    }
}

fn print_reply(reply: &Reply, html: bool) {
    if html {
        println!("{}", reply.html);
        return;
    }
    println!("{}", reply.text);
    if !reply.citations.is_empty() {
        println!("\nSources:");
        for (i, citation) in reply.citations.iter().enumerate() {
            println!("[{}] {} - {}", i + 1, citation.title, citation.url);
        }
    }
}

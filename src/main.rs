use anyhow::Context;
use clap::Parser;
use portfolio_site::utils::error::ErrorSeverity;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{
    CliConfig, ConsoleAlerts, HeadlessDocument, LogContactChannel, PortfolioError,
    PortfolioViewModel, SiteConfig,
};

type ViewModel = PortfolioViewModel<HeadlessDocument, LogContactChannel, ConsoleAlerts>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting portfolio-site");
    tracing::debug!("CLI config: {:?}", cli);

    let site = load_site_config(&cli).unwrap_or_else(|e| exit_with(&e));
    let settings = site.view_settings().unwrap_or_else(|e| exit_with(&e));
    let content = site.content_store();
    let document = HeadlessDocument::for_site(&content, cli.viewport_height);

    let mut vm: ViewModel =
        PortfolioViewModel::new(content, settings, document, LogContactChannel, ConsoleAlerts);

    let watched = vm.initialize_animations().await;
    let revealed = vm.pump();
    tracing::info!("👀 Watching {} elements, {} visible on load", watched, revealed);

    print_content(&vm, cli.json)?;

    for section in &cli.sections {
        match vm.scroll_to_section(section) {
            Some(request) => {
                let newly = vm.pump();
                println!(
                    "🧭 #{} -> scrollY {:.0} ({} newly revealed)",
                    section,
                    vm.document().scroll_y(),
                    newly
                );
                tracing::debug!("Requested scroll top {}", request.top);
            }
            None => println!("🧭 #{} not found, staying put", section),
        }
    }

    if let Some(url) = &cli.open {
        vm.open_external_link(url).unwrap_or_else(|e| exit_with(&e));
        println!("🔗 Opened {}", url);
    }

    if cli.resume {
        vm.download_resume().unwrap_or_else(|e| exit_with(&e));
    }

    if let Some(input) = cli.contact_input() {
        for (field, value) in input {
            vm.set_field(field, value);
        }
        let outcome = vm.submit().unwrap_or_else(|e| exit_with(&e));
        tracing::debug!("Submit outcome: {:?}", outcome);
    }

    if let Some(observer) = vm.observer() {
        println!(
            "✨ {}/{} animated elements revealed",
            observer.revealed_count(),
            observer.watched().len()
        );
    }

    Ok(())
}

fn load_site_config(cli: &CliConfig) -> portfolio_site::Result<SiteConfig> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading site configuration from: {}", path);
            SiteConfig::from_file(path)?
        }
        None => SiteConfig::default(),
    };
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");
    Ok(config)
}

fn print_content(vm: &ViewModel, json: bool) -> anyhow::Result<()> {
    if json {
        let payload = serde_json::json!({
            "title": vm.title(),
            "skill_categories": vm.skill_categories(),
            "projects": vm.projects(),
        });
        let rendered =
            serde_json::to_string_pretty(&payload).context("failed to render content as JSON")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", vm.title());
    println!();
    println!("Skills");
    for category in vm.skill_categories() {
        println!("  {}", category.name);
        for skill in &category.skills {
            println!("    {:<16} {:>3}%", skill.name, skill.level);
        }
    }
    println!();
    println!("Projects");
    for project in vm.projects() {
        println!("  {} [{}]", project.title, project.technologies.join(", "));
        println!("    live:   {}", project.live_url);
        println!("    source: {}", project.github_url);
    }
    println!();
    Ok(())
}

fn exit_with(e: &PortfolioError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

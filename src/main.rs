use chrono::Utc;
use clap::Parser;
use quire::application::{
    BuildService, CreatePostService, InitService, ListPostsService, ListTagsService,
};
use quire::cli::{format_post_list, format_tag_list, Cli, Commands};
use quire::error::QuireError;
use quire::infrastructure::FileSystemRepository;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), QuireError> {
    match cli.command {
        Commands::Init { path } => InitService::execute(&path),
        Commands::New {
            slug,
            title,
            collection,
        } => {
            let repo = FileSystemRepository::discover()?;
            let service = CreatePostService::new(repo);
            let today = Utc::now().date_naive();
            let created = service.execute(&slug, &title.join(" "), &collection, today)?;
            println!("Created new post at {}", created.display());
            Ok(())
        }
        Commands::Tags { collection } => {
            let repo = FileSystemRepository::discover()?;
            let service = ListTagsService::new(repo);
            let tags = service.execute(collection.as_deref())?;
            print!("{}", format_tag_list(&tags));
            if tags.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Posts {
            tag,
            collection,
            order,
        } => {
            let repo = FileSystemRepository::discover()?;
            let service = ListPostsService::new(repo);
            let posts = service.execute(tag.as_deref(), collection.as_deref(), order)?;
            print!("{}", format_post_list(&posts));
            if posts.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Build => {
            let repo = FileSystemRepository::discover()?;
            let service = BuildService::new(repo);
            let report = service.execute()?;
            println!(
                "Wrote feed with {} items to {}",
                report.feed_items,
                report.feed_path.display()
            );
            println!(
                "Wrote {} tags to {}",
                report.tag_count,
                report.tags_path.display()
            );
            if report.sitemap_aliased {
                println!("Created sitemap.xml alias");
            }
            Ok(())
        }
    }
}

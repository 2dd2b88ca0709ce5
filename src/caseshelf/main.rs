use caseshelf::api::ShelfApi;
use caseshelf::error::Result;
use caseshelf::i18n::Translator;
use caseshelf::model::SearchFilters;
use caseshelf::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_cases, print_full_cases, print_messages, print_stats};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::List { favorites }) => handle_list(&api, favorites),
        Some(Commands::View { ids }) => handle_view(&api, &ids),
        Some(Commands::Search {
            query,
            category,
            tag,
            favorites,
        }) => handle_search(&api, query, category, tag, favorites),
        Some(Commands::Fav { ids }) => handle_fav(&mut api, &ids),
        Some(Commands::Favorites) => handle_list(&api, true),
        Some(Commands::ClearFavorites { yes }) => handle_clear(&mut api, yes),
        Some(Commands::Lang { code }) => handle_lang(&mut api, code),
        Some(Commands::Stats) => handle_stats(&api),
        None => handle_list(&api, false),
    }
}

fn init_api(cli: &Cli) -> Result<ShelfApi<FileStore>> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "caseshelf", "caseshelf")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let store = FileStore::new(data_dir);
    let mut api = ShelfApi::open(store);
    if let Some(code) = &cli.lang {
        api = api.with_language(code.parse()?);
    }
    Ok(api)
}

fn handle_list(api: &ShelfApi<FileStore>, favorites_only: bool) -> Result<()> {
    let result = api.list_cases(favorites_only)?;
    print_cases(&result.listed_cases, &api.favorite_ids(), api.language());
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &ShelfApi<FileStore>, ids: &[u32]) -> Result<()> {
    let result = api.view_cases(ids)?;
    let t = Translator::new(api.language());
    print_full_cases(&result.listed_cases, &api.favorite_ids(), &t);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(
    api: &ShelfApi<FileStore>,
    query: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
    favorites_only: bool,
) -> Result<()> {
    let filters = SearchFilters {
        query: query.unwrap_or_default(),
        category,
        tags,
        favorites_only,
    };
    let result = api.search_cases(&filters)?;
    print_cases(&result.listed_cases, &api.favorite_ids(), api.language());
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(api: &mut ShelfApi<FileStore>, ids: &[u32]) -> Result<()> {
    let result = api.toggle_favorites(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(api: &mut ShelfApi<FileStore>, yes: bool) -> Result<()> {
    let result = api.clear_favorites(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_lang(api: &mut ShelfApi<FileStore>, code: Option<String>) -> Result<()> {
    let result = match code {
        Some(code) => api.set_language(code.parse()?)?,
        None => api.get_language()?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(api: &ShelfApi<FileStore>) -> Result<()> {
    let result = api.stats()?;
    let t = Translator::new(api.language());
    if let Some(stats) = &result.stats {
        print_stats(stats, &t);
    }
    print_messages(&result.messages);
    Ok(())
}

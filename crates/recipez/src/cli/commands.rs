use super::render::{render_json, render_list, render_recipe, render_tags, TerminalNotifier};
use super::setup::{AddArgs, Cli, Commands, ListArgs};
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use recipezapp::api::RecipezApi;
use recipezapp::error::RecipezError;
use recipezapp::filter::{FilterKind, FilterUpdate};
use recipezapp::init::{initialize, RecipezContext};
use recipezapp::model::{Ingredient, RecipeDraft};
use recipezapp::state::Phase;
use recipezapp::store::fs_backend::FsBackend;
use tracing_subscriber::EnvFilter;

type Api = RecipezApi<FsBackend, TerminalNotifier>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let RecipezContext {
        mut api,
        config,
        data_dir,
    } = initialize(cli.data, TerminalNotifier)?;
    tracing::debug!(data_dir = %data_dir.display(), "session start");
    api.initialize();

    match cli
        .command
        .unwrap_or_else(|| Commands::List(ListArgs::default()))
    {
        Commands::List(args) => handle_list(&mut api, args),
        Commands::Show { id } => {
            let recipe = api
                .recipe(&id)
                .ok_or_else(|| RecipezError::RecipeNotFound(id.clone()))?;
            print!("{}", render_recipe(recipe, config.placeholder_image()));
            Ok(())
        }
        Commands::Favorite { id } => handle_favorite(&mut api, &id),
        Commands::Favorites { json } => {
            let favorites = api.favorite_recipes();
            if json {
                println!("{}", render_json(&favorites)?);
            } else if favorites.is_empty() {
                println!("No favorites yet. Mark one with `recipez fav <id>`.");
            } else {
                print!("{}", render_list(&favorites, false));
            }
            Ok(())
        }
        Commands::Add(args) => handle_add(&mut api, args),
        Commands::Tags => {
            print!("{}", render_tags());
            Ok(())
        }
        Commands::Reset => {
            api.reset()?;
            println!("Catalog reset.");
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("recipezapp=debug,recipez=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_list(api: &mut Api, args: ListArgs) -> Result<()> {
    for diet in &args.diets {
        api.set_filter(FilterKind::Diet, diet, true);
    }
    for cuisine in &args.cuisines {
        api.set_filter(FilterKind::Cuisine, cuisine, true);
    }
    // The engine matches the query literally; stray shell whitespace is dropped here.
    if let Some(query) = args.query.as_deref().map(str::trim) {
        api.update_filter(FilterUpdate::Query(query.to_string()));
    }

    let view = api.view();
    if args.json {
        println!("{}", render_json(&view)?);
    } else {
        print!(
            "{}",
            render_list(&view.filtered_recipes, view.has_active_filters())
        );
    }
    Ok(())
}

fn handle_favorite(api: &mut Api, id: &str) -> Result<()> {
    let recipe = api.toggle_favorite(id)?;
    ensure_saved(api)?;
    if recipe.favorite {
        println!("★ {} is now a favorite.", recipe.title);
    } else {
        println!("{} is no longer a favorite.", recipe.title);
    }
    Ok(())
}

fn handle_add(api: &mut Api, args: AddArgs) -> Result<()> {
    let draft = draft_from_args(args)?;
    let recipe = api.add_recipe(draft)?;
    ensure_saved(api)?;
    println!("Added {}: {}", recipe.id, recipe.title);
    Ok(())
}

/// A failed save keeps the change for this session only; the process exits non-zero.
fn ensure_saved(api: &Api) -> Result<()> {
    if api.phase() == Phase::Error {
        let reason = api.view().error.unwrap_or_default();
        bail!("{}", reason);
    }
    Ok(())
}

fn draft_from_args(args: AddArgs) -> Result<RecipeDraft> {
    let ingredients = args
        .ingredients
        .iter()
        .map(String::as_str)
        .map(parse_ingredient)
        .collect::<Result<Vec<_>>>()?;

    Ok(RecipeDraft {
        title: args.title,
        image: args.image,
        servings: args.servings,
        ready_in_minutes: args.minutes,
        source_url: args.source,
        summary: args.summary,
        cuisines: args.cuisines,
        diets: args.diets,
        dish_types: args.dish_types,
        instructions: args.instructions,
        ingredients,
    })
}

/// Parse `"AMOUNT UNIT NAME"`. Two words mean no unit (`"3 eggs"`).
/// Amounts may be decimals or simple fractions (`"1/2 cup milk"`).
fn parse_ingredient(input: &str) -> Result<Ingredient> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let (amount, unit, name) = match words.as_slice() {
        [amount, name] => (*amount, "", name.to_string()),
        [amount, unit, rest @ ..] if !rest.is_empty() => (*amount, *unit, rest.join(" ")),
        _ => bail!(
            "ingredient '{}' should look like \"AMOUNT UNIT NAME\", e.g. \"2 cups flour\"",
            input
        ),
    };
    let amount = parse_amount(amount)
        .with_context(|| format!("ingredient '{}' has an invalid amount", input))?;
    Ok(Ingredient::new(name, amount, unit))
}

fn parse_amount(text: &str) -> Result<f64> {
    if let Some((num, den)) = text.split_once('/') {
        let num: f64 = num.parse()?;
        let den: f64 = den.parse()?;
        if den == 0.0 {
            return Err(anyhow!("division by zero"));
        }
        return Ok(num / den);
    }
    Ok(text.parse()?)
}

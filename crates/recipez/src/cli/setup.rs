use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "recipez",
    bin_name = "recipez",
    version,
    disable_help_subcommand = true,
    about = "Browse, filter and favorite recipes from the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding recipes.json and favorites.json (overrides RECIPEZ_DATA)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (library debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes, narrowed by the given filters
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one recipe in full
    #[command(alias = "view")]
    Show {
        /// Recipe id
        id: String,
    },

    /// Toggle a recipe's favorite state
    #[command(alias = "fav")]
    Favorite {
        /// Recipe id
        id: String,
    },

    /// List favorite recipes
    #[command(alias = "favs")]
    Favorites {
        /// Print the recipes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a recipe to the catalog
    Add(AddArgs),

    /// Show the diet and cuisine tags that can be filtered on
    Tags,

    /// Erase saved recipes and favorites
    Reset,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Only recipes tagged with this diet (repeatable, any of)
    #[arg(long = "diet", value_name = "TAG")]
    pub diets: Vec<String>,

    /// Only recipes tagged with this cuisine (repeatable, any of)
    #[arg(long = "cuisine", value_name = "TAG")]
    pub cuisines: Vec<String>,

    /// Search title, summary and ingredient names
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub summary: String,

    /// Ingredient as "AMOUNT UNIT NAME", e.g. "2 cups flour" (repeatable)
    #[arg(long = "ingredient", short = 'i', value_name = "AMOUNT UNIT NAME", required = true)]
    pub ingredients: Vec<String>,

    #[arg(long, default_value_t = 4)]
    pub servings: u32,

    /// Ready time in minutes
    #[arg(long)]
    pub minutes: Option<u32>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Source URL
    #[arg(long)]
    pub source: Option<String>,

    /// Instructions, steps introduced by "1.", "2.", ...
    #[arg(long)]
    pub instructions: Option<String>,

    #[arg(long = "diet", value_name = "TAG")]
    pub diets: Vec<String>,

    #[arg(long = "cuisine", value_name = "TAG")]
    pub cuisines: Vec<String>,

    #[arg(long = "dish-type", value_name = "TYPE")]
    pub dish_types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["recipez"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_filters_repeat() {
        let cli = Cli::try_parse_from([
            "recipez", "list", "--diet", "vegan", "--diet", "keto", "--cuisine", "thai", "-q",
            "soup",
        ])
        .unwrap();
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.diets, vec!["vegan", "keto"]);
        assert_eq!(args.cuisines, vec!["thai"]);
        assert_eq!(args.query.as_deref(), Some("soup"));
    }

    #[test]
    fn test_fav_alias_and_global_data() {
        let cli = Cli::try_parse_from(["recipez", "fav", "3", "--data", "/tmp/r"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Favorite { ref id }) if id == "3"));
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/r")));
    }

    #[test]
    fn test_add_requires_an_ingredient() {
        let result = Cli::try_parse_from(["recipez", "add", "--title", "T", "--summary", "S"]);
        assert!(result.is_err());
    }
}

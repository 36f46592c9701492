use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use recipe_model::parser::{load_profile, load_recipes};
use recipe_model::{DietGoal, MealType, Recipe, RecipeId, UserProfile};
use scoring::{RankedRecipe, RecipeRanker, ScoringConfig, ScoringContext};
use std::path::{Path, PathBuf};
use tracing::info;

/// RecipeRecs - Recipe recommendation scorer
#[derive(Parser)]
#[command(name = "recipe-recs")]
#[command(about = "Rank recipes against a dietary profile", long_about = None)]
struct Cli {
    /// JSON file overriding scoring weights and targets
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Inputs of one ranking request
#[derive(Args)]
struct RequestArgs {
    /// Recipes JSON file (array or search response with `results`)
    #[arg(short, long, default_value = "data/recipes.json")]
    recipes: PathBuf,

    /// User profile JSON file
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Ingredient the user has on hand (repeatable)
    #[arg(short, long = "ingredient")]
    ingredients: Vec<String>,

    /// breakfast, lunch, dinner or snack
    #[arg(short, long)]
    meal_type: Option<MealType>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank recipes by relevance
    Rank {
        #[command(flatten)]
        request: RequestArgs,

        /// Number of recipes to show
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Show the per-factor breakdown for each recipe
        #[arg(long)]
        explain: bool,
    },

    /// Explain the score of a single recipe
    Score {
        #[command(flatten)]
        request: RequestArgs,

        /// Recipe ID to score
        #[arg(long)]
        id: RecipeId,
    },

    /// Show calorie envelopes and macro targets
    Targets {
        /// lose, maintain or gain (all goals when omitted)
        #[arg(long)]
        goal: Option<DietGoal>,

        /// Scale the daily ceiling to one meal
        #[arg(short, long)]
        meal_type: Option<MealType>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ScoringConfig::default(),
    };

    match cli.command {
        Commands::Rank {
            request,
            limit,
            explain,
        } => handle_rank(config, request, limit, explain)?,
        Commands::Score { request, id } => handle_score(config, request, id)?,
        Commands::Targets { goal, meal_type } => handle_targets(&config, goal, meal_type),
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<ScoringConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: ScoringConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config.validate().context("Invalid scoring configuration")?;
    info!("Loaded scoring configuration from {}", path.display());
    Ok(config)
}

/// Recipes and optional profile named by the request
fn load_inputs(request: &RequestArgs) -> Result<(Vec<Recipe>, Option<UserProfile>)> {
    let recipes = load_recipes(&request.recipes)
        .with_context(|| format!("Failed to load recipes from {}", request.recipes.display()))?;
    let profile = request
        .profile
        .as_deref()
        .map(|path| {
            load_profile(path)
                .with_context(|| format!("Failed to load profile from {}", path.display()))
        })
        .transpose()?;
    info!(
        "Loaded {} recipes ({} profile)",
        recipes.len(),
        if profile.is_some() { "with" } else { "without" }
    );
    Ok((recipes, profile))
}

/// Handle the 'rank' command
fn handle_rank(
    config: ScoringConfig,
    request: RequestArgs,
    limit: usize,
    explain: bool,
) -> Result<()> {
    let (recipes, profile) = load_inputs(&request)?;
    let ranker = RecipeRanker::new(config);

    let ranked = ranker.rank_with_scores(
        &recipes,
        profile.as_ref(),
        request.ingredients.as_slice(),
        request.meal_type,
    );

    let filtered_out = recipes.len() - ranked.len();
    if filtered_out > 0 {
        println!(
            "{} {} recipe(s) removed for allergens",
            "!".yellow(),
            filtered_out
        );
    }
    print_ranking(&ranked[..ranked.len().min(limit)], explain);
    Ok(())
}

/// Handle the 'score' command
fn handle_score(config: ScoringConfig, request: RequestArgs, id: RecipeId) -> Result<()> {
    let (recipes, profile) = load_inputs(&request)?;
    let recipe = recipes
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| anyhow!("Recipe {} not found", id))?;

    let ranker = RecipeRanker::new(config);
    let ranked = ranker.rank_with_scores(
        &recipes,
        profile.as_ref(),
        request.ingredients.as_slice(),
        request.meal_type,
    );
    let position = ranked
        .iter()
        .position(|r| r.recipe.id == id)
        .ok_or_else(|| {
            anyhow!(
                "Recipe {} ({}) is excluded by the profile's allergies",
                id,
                recipe.title
            )
        })?;

    let context = ScoringContext::new(
        profile.as_ref(),
        request.ingredients.as_slice(),
        request.meal_type,
    );
    let breakdown = ranked[position].breakdown;

    println!("{}", format!("{} (id {})", recipe.title, recipe.id).bold().blue());
    println!("{}Rank: {} of {}", "• ".green(), position + 1, ranked.len());
    println!("{}Nutrition: {:.3}", "• ".green(), breakdown.nutrition);
    println!("{}Cuisine: {:.3}", "• ".green(), breakdown.cuisine);
    println!("{}Ingredients: {:.3}", "• ".green(), breakdown.ingredient);
    println!("{}Goal multiplier: {:.1}", "• ".green(), breakdown.diet_goal_multiplier);
    println!("{}Total: {:.3}", "• ".cyan(), breakdown.total);
    if let (Some(goal), Some(nutrition)) = (context.diet_goal(), recipe.nutrition) {
        println!(
            "{}Calories: {:.0} vs target {:.0} ({})",
            "• ".cyan(),
            nutrition.calories,
            ranker.config().target_calories(goal, context.meal_type),
            goal
        );
    }
    Ok(())
}

/// Handle the 'targets' command
fn handle_targets(config: &ScoringConfig, goal: Option<DietGoal>, meal_type: Option<MealType>) {
    let goals = match goal {
        Some(goal) => vec![goal],
        None => DietGoal::ALL.to_vec(),
    };
    let meal = meal_type.map(|m| m.as_str()).unwrap_or("full day");

    println!("{}", format!("Nutrition targets ({}):", meal).bold().blue());
    for goal in goals {
        let target = config.targets.for_goal(goal);
        println!(
            "{} {:<8} {:>6.0} kcal  protein {:.0}% / carbs {:.0}% / fat {:.0}%",
            "•".green(),
            goal.as_str(),
            config.target_calories(goal, meal_type),
            target.protein_ratio * 100.0,
            target.carbs_ratio * 100.0,
            target.fat_ratio * 100.0
        );
    }
}

/// Helper function to format and print a ranking
fn print_ranking(ranked: &[RankedRecipe], explain: bool) {
    print!("{}", "Recipe Recommendations:\n".bold().blue());
    for (index, entry) in ranked.iter().enumerate() {
        let recipe = entry.recipe;
        let calories = recipe
            .nutrition
            .map(|n| format!("{:.0} kcal", n.calories))
            .unwrap_or_else(|| "? kcal".to_string());
        println!(
            "{}. {} [{}] uses {} / misses {} - Score: {:.2}",
            (index + 1).to_string().green(),
            recipe.title,
            calories,
            recipe.used_ingredient_count,
            recipe.missed_ingredient_count,
            entry.score()
        );
        if explain {
            println!("   {}", entry.breakdown.explain());
        }
    }
}

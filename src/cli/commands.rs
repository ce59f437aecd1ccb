use serde::Serialize;

use crate::app::{AppContext, Result};
use crate::cli::Commands;
use crate::filters::{MovieDetailsFilters, SearchMoviesFilters};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run(ctx: &AppContext, command: Commands) -> Result<()> {
    let client = &ctx.client;

    match command {
        Commands::Trending => print_json(&client.trending_movies().await?),
        Commands::Home => print_json(&client.home_page_content().await?),
        Commands::Director { slug } => print_json(&client.movie_director(&slug).await?),
        Commands::Reviews { slug } => print_json(&client.movie_reviews(&slug).await?),
        Commands::Comments { slug, page } => {
            print_json(&client.movie_comments(&slug, page).await?)
        }
        Commands::Details { slug } => print_json(&client.movie_additional_details(&slug).await?),
        Commands::Resolve { slug } => {
            let id = client.resolve_movie_slug_to_id(&slug).await?;
            print_json(&serde_json::json!({ "slug": slug, "movie_id": id }))
        }
        Commands::Search { term, page, limit } => {
            let filters = SearchMoviesFilters {
                page,
                limit,
                ..SearchMoviesFilters::default_for(term)
            };
            print_json(&client.search_movies(&filters).await?)
        }
        Commands::Movie { id } => {
            print_json(&client.movie_details(id, &MovieDetailsFilters::default()).await?)
        }
        Commands::Suggestions { id } => print_json(&client.movie_suggestions(id).await?),
        Commands::Magnets { id } => magnets(ctx, id).await,
    }
}

async fn magnets(ctx: &AppContext, id: i64) -> Result<()> {
    let filters = MovieDetailsFilters {
        with_images: false,
        with_cast: false,
    };
    let response = ctx.client.movie_details(id, &filters).await?;
    let movie = &response.data.movie;

    if movie.partial.torrents.is_empty() {
        tracing::warn!(id, "movie has no torrents");
    }
    print_json(&ctx.client.magnet_links(movie))
}

use polars::prelude::*;

// Source CSV columns (tmdb-movies.csv):
//     id, imdb_id, popularity, budget, revenue, original_title, cast,
//     homepage, director, tagline, keywords, overview, runtime, genres,
//     production_companies, release_date, vote_count, vote_average,
//     release_year, budget_adj, revenue_adj
//
// Everything not selected below is dropped at load: identifiers and
// free-text columns play no role in the revenue analysis, and budget/revenue
// are superseded by their inflation-adjusted counterparts.

pub struct TmdbData {
    pub movies: DataFrame,
}

impl TmdbData {
    pub fn load(path: &str) -> Result<Self, PolarsError> {
        let raw = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10_000))
            .try_into_reader_with_file_path(Some(path.into()))?
            .finish()?;

        let movies = raw
            .lazy()
            .select([
                col("original_title").cast(DataType::String),
                col("cast").cast(DataType::String),
                col("director").cast(DataType::String),
                col("genres").cast(DataType::String),
                col("runtime").cast(DataType::Int64),
                col("popularity").cast(DataType::Float64),
                col("vote_count").cast(DataType::Int64),
                col("vote_average").cast(DataType::Float64),
                col("release_year").cast(DataType::Int32),
                col("budget_adj").cast(DataType::Float64),
                col("revenue_adj").cast(DataType::Float64),
            ])
            .collect()?;

        Ok(TmdbData { movies })
    }
}

/// One row of the loaded table. String columns other than the title may be
/// absent in the source data; numeric columns may not.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub original_title: String,
    pub cast: Option<String>,
    pub director: Option<String>,
    pub genres: Option<String>,
    pub runtime: i64,
    pub popularity: f64,
    pub vote_count: i64,
    pub vote_average: f64,
    pub release_year: i32,
    pub budget_adj: f64,
    pub revenue_adj: f64,
}

fn missing(field: &str, row: usize) -> PolarsError {
    PolarsError::ComputeError(format!("{field} missing at row {row}").into())
}

pub fn movies(df: &DataFrame) -> Result<Vec<Movie>, PolarsError> {
    let original_title = df.column("original_title")?.str()?;
    let cast = df.column("cast")?.str()?;
    let director = df.column("director")?.str()?;
    let genres = df.column("genres")?.str()?;
    let runtime = df.column("runtime")?.i64()?;
    let popularity = df.column("popularity")?.f64()?;
    let vote_count = df.column("vote_count")?.i64()?;
    let vote_average = df.column("vote_average")?.f64()?;
    let release_year = df.column("release_year")?.i32()?;
    let budget_adj = df.column("budget_adj")?.f64()?;
    let revenue_adj = df.column("revenue_adj")?.f64()?;

    let mut out = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        out.push(Movie {
            original_title: original_title
                .get(i)
                .ok_or_else(|| missing("original_title", i))?
                .to_string(),
            cast: cast.get(i).map(str::to_string),
            director: director.get(i).map(str::to_string),
            genres: genres.get(i).map(str::to_string),
            runtime: runtime.get(i).ok_or_else(|| missing("runtime", i))?,
            popularity: popularity.get(i).ok_or_else(|| missing("popularity", i))?,
            vote_count: vote_count.get(i).ok_or_else(|| missing("vote_count", i))?,
            vote_average: vote_average
                .get(i)
                .ok_or_else(|| missing("vote_average", i))?,
            release_year: release_year
                .get(i)
                .ok_or_else(|| missing("release_year", i))?,
            budget_adj: budget_adj.get(i).ok_or_else(|| missing("budget_adj", i))?,
            revenue_adj: revenue_adj.get(i).ok_or_else(|| missing("revenue_adj", i))?,
        });
    }
    Ok(out)
}

#[cfg(test)]
pub(crate) fn sample(title: &str) -> Movie {
    Movie {
        original_title: title.to_string(),
        cast: None,
        director: None,
        genres: None,
        runtime: 100,
        popularity: 1.0,
        vote_count: 100,
        vote_average: 6.0,
        release_year: 2000,
        budget_adj: 1.0e7,
        revenue_adj: 5.0e7,
    }
}

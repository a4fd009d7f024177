use std::path::PathBuf;

use clap::Parser;

use crate::{
    domain::view::{GenreFilter, SortOrder},
    utils::version,
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Catalog JSON file to browse instead of the built-in one"
    )]
    pub data: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "GENRE",
        help = "Initial genre filter: `all` or a genre id"
    )]
    pub genre: Option<GenreFilter>,

    #[arg(
        short,
        long,
        value_name = "ORDER",
        help = "Initial sort order: most-recent, oldest or none"
    )]
    pub sort: Option<SortOrder>,
}

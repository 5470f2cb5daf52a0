use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "students", bin_name = "students", version)]
#[command(about = "Keep a roster of students in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// The data file name (falls back to the DATA environment variable)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a student
    Add {
        /// Full name of the student
        #[arg(short, long)]
        name: String,

        /// Group number
        #[arg(short, long, allow_negative_numbers = true)]
        group: Option<i64>,

        /// Mark of the student
        #[arg(short, long, allow_negative_numbers = true)]
        mark: i64,
    },

    /// Show all students
    List,

    /// Show students with a mark above 4
    Filter,
}

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Start the calendar and read selections from stdin (default)",
        long_about = "Start the calendar and read selections from stdin.\n\n\
                      Each line is one interaction:\n  \
                      <id>               select a season\n  \
                      key <id> <key>     key press on a season control (enter, space, ...)\n  \
                      quit               stop reading input"
    )]
    Run,

    #[command(about = "Render a single season")]
    Show {
        #[arg(help = "Season id, e.g. 3")]
        id: String,

        #[arg(long, help = "Skip the climate lookup and use the catalog's static climate")]
        offline: bool,
    },

    #[command(about = "List the seasons in the catalog")]
    List,
}

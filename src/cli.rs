use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Pull verified NFT collections from the Joepegs listing API",
    long_about = "A one-shot tool that walks the paginated Joepegs collections listing, keeps\nverified erc721 collections, and prints the requested fields as indented JSON\non stdout.\n\nEnvironment:\n  COLLECTIONS_URL    Listing endpoint (default https://barn.joepegs.com/v2/collections)\n"
)]
pub struct Cli {
    #[arg(
        long,
        env = "COLLECTIONS_URL",
        default_value = "https://barn.joepegs.com/v2/collections",
        value_name = "URL",
        help = "Collections listing endpoint"
    )]
    pub url: String,

    #[arg(
        long = "field",
        value_name = "NAME",
        default_values_t = ["address".to_string(), "name".to_string()],
        help = "Collection attribute to include in the output (repeatable)"
    )]
    pub fields: Vec<String>,

    #[arg(
        long,
        default_value_t = 30,
        value_name = "SECS",
        help = "HTTP request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(long, value_name = "PATH", help = "Also append logs to this file")]
    pub log_file: Option<String>,
}

pub fn parse() -> Cli {
    Cli::parse()
}
